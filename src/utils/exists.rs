//! Default asset existence check.

use std::path::Path;
use url::Url;

/// Check whether a string is a syntactically valid absolute URL with a host.
///
/// Purely syntactic; no reachability probe is made. Requiring a host rules
/// out strings like `C:/data` that technically parse with a one-letter
/// scheme.
///
/// # Examples
///
/// ```
/// use genome_registry::utils::exists::is_url;
///
/// assert!(is_url("http://refgenomes.databio.org/hg38/fasta"));
/// assert!(is_url("s3://bucket/hg38.fa"));
/// assert!(!is_url("/genomes/hg38/hg38.fa"));
/// assert!(!is_url("C:/genomes/hg38.fa"));
/// ```
#[must_use]
pub fn is_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

/// Default existence check for registered asset paths: the path exists on
/// the local filesystem, or the string is a URL.
#[must_use]
pub fn default_check_exist(path: &str) -> bool {
    Path::new(path).exists() || is_url(path)
}
