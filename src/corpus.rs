use crate::error::{KeyFitError, KfResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Word -> occurrence count.
pub type TokenFrequencies = BTreeMap<String, u64>;

pub const POPULAR_BIGRAMS: &[(&str, u64)] = &[
    ("th", 92535489),
    ("he", 87741289),
    ("in", 54433847),
    ("er", 51910883),
    ("an", 51015163),
    ("re", 41694599),
    ("nd", 37466077),
    ("on", 33802063),
    ("en", 32967758),
    ("at", 31830493),
    ("ou", 30637892),
    ("ed", 30406590),
    ("ha", 30381856),
    ("to", 27877259),
    ("or", 27434858),
    ("it", 27048699),
    ("is", 26452510),
    ("hi", 26033632),
    ("es", 26033602),
    ("ng", 25106109),
];

pub const POPULAR_TRIGRAMS: &[(&str, u64)] = &[
    ("the", 59623899),
    ("and", 27088636),
    ("ing", 19494469),
    ("her", 13977786),
    ("hat", 11059185),
    ("his", 10141992),
    ("tha", 10088372),
    ("ere", 9527535),
    ("for", 9438784),
    ("ent", 9020688),
    ("ion", 8607405),
    ("ter", 7836576),
    ("was", 7826182),
    ("you", 7430619),
    ("ith", 7329285),
    ("ver", 7320472),
    ("all", 7184955),
    ("wit", 6752112),
    ("thi", 6709729),
    ("tio", 6425262),
];

/// Loads a token frequency list.
///
/// `.json` files hold an object of word -> count. Anything else is read as
/// CSV, or TSV for `.tsv`, with `word,count` rows and no header.
pub fn load_tokens<P: AsRef<Path>>(path: P) -> KfResult<TokenFrequencies> {
    let path = path.as_ref();
    info!("📚 Loading tokens from: {}", path.display());

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let tokens = if ext == "json" {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    } else {
        let delimiter = if ext == "tsv" { b'\t' } else { b',' };
        let file = fs::File::open(path)?;
        read_delimited_tokens(file, delimiter)?
    };

    debug!("   -> {} distinct tokens", tokens.len());
    Ok(tokens)
}

pub fn read_delimited_tokens<R: std::io::Read>(
    reader: R,
    delimiter: u8,
) -> KfResult<TokenFrequencies> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut tokens = TokenFrequencies::new();
    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() < 2 {
            continue;
        }
        let word = rec[0].to_string();
        if word.is_empty() {
            continue;
        }
        let count: u64 = rec[1].trim().parse().map_err(|_| {
            KeyFitError::Validation(format!(
                "Row {}: invalid frequency '{}' for token {:?}",
                row_idx + 1,
                &rec[1],
                word
            ))
        })?;
        *tokens.entry(word).or_default() += count;
    }
    Ok(tokens)
}

/// Counts tokens given one per line. Surrounding whitespace is trimmed and
/// blank lines ignored.
pub fn count_tokens(text: &str) -> TokenFrequencies {
    let mut counts = TokenFrequencies::new();
    for token in text.lines().map(str::trim).filter(|t| !t.is_empty()) {
        *counts.entry(token.to_string()).or_default() += 1;
    }
    counts
}

/// Concatenates every `.txt` file under `dir` (sorted by path), separated by a blank line.
pub fn load_text_dir<P: AsRef<Path>>(dir: P) -> KfResult<String> {
    let dir = dir.as_ref();
    let mut paths: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(KeyFitError::Config(format!(
            "No .txt files found under '{}'",
            dir.display()
        )));
    }

    let texts = paths
        .iter()
        .map(fs::read_to_string)
        .collect::<Result<Vec<_>, _>>()?;

    info!("📂 Loaded {} text files from {}", texts.len(), dir.display());
    Ok(texts.join("\n\n"))
}

/// Builds a text where each n-gram appears in proportion to its share
/// (rounded percent), once plain and once title-cased.
pub fn synthetic_text(dictionary: &[(&str, u64)]) -> String {
    let total: u64 = dictionary.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return String::new();
    }

    let mut tokens: Vec<String> = Vec::new();
    for (gram, count) in dictionary {
        let times = (*count as f64 / total as f64 * 100.0).round() as usize;
        let title = titleize(gram);
        tokens.extend(std::iter::repeat(gram.to_string()).take(times));
        tokens.extend(std::iter::repeat(title).take(times));
    }
    tokens.join(" ")
}

fn titleize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
