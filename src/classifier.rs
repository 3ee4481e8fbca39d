/// File classification by extension.
///
/// This module resolves a destination folder name for a file from two
/// sources: the user's custom rules (checked first, always win) and a fixed
/// built-in table of default categories.
///
/// # Examples
///
/// ```
/// use dirsort::classifier::{DEFAULT_CATEGORIES, classify};
/// use dirsort::category_store::CategoryStore;
///
/// let store = CategoryStore::empty("categories.json");
/// assert_eq!(classify("photo.png", &store, DEFAULT_CATEGORIES), Some("Images"));
/// assert_eq!(classify("data.xyz", &store, DEFAULT_CATEGORIES), None);
/// ```
use crate::category_store::CategoryStore;

/// The built-in default categories: destination folder name paired with a
/// comma-separated list of extensions. An entry list may contain the
/// wildcard token `*`, which matches any extension.
///
/// The table is immutable and its order is fixed; the first matching entry
/// wins. Every extension appears under exactly one folder, so the order
/// never decides between two candidates.
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Documents", "pdf,doc,docx,txt,xls,xlsx,ppt,pptx,csv"),
    ("Images", "jpg,jpeg,png,gif,bmp,svg"),
    ("Videos", "mp4,mkv,avi,mov,flv"),
    ("Music", "mp3,wav,aac,flac,m4a"),
    ("Executables", "exe,msi,bat,sh,jar"),
    ("Archives", "zip,rar,7z,tar,gz"),
];

/// Extracts the lowercase extension of a file name.
///
/// The extension is the substring after the last `.`. A name with no dot,
/// or whose only dot is the first character (a hidden file such as
/// `.gitignore`), has an empty extension.
///
/// # Examples
///
/// ```
/// use dirsort::classifier::extract_extension;
///
/// assert_eq!(extract_extension("report.v2.PDF"), "pdf");
/// assert_eq!(extract_extension("README"), "");
/// assert_eq!(extract_extension(".gitignore"), "");
/// ```
pub fn extract_extension(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(index) if index > 0 => file_name[index + 1..].to_lowercase(),
        _ => String::new(),
    }
}

/// Resolves the destination folder for a file name, or `None` if no rule
/// matches and the file should be left untouched.
///
/// Custom rules are checked first: a store hit returns immediately, with no
/// further matching against the defaults. Otherwise the default table is
/// scanned in order and the first entry whose extension list contains the
/// file's extension (case-insensitively) or the `*` wildcard wins.
pub fn classify<'a>(
    file_name: &str,
    store: &'a CategoryStore,
    defaults: &'a [(&'a str, &'a str)],
) -> Option<&'a str> {
    let extension = extract_extension(file_name);

    if let Some(folder) = store.folder_for(&extension) {
        return Some(folder);
    }

    for &(folder, extensions) in defaults {
        for candidate in extensions.split(',') {
            let candidate = candidate.trim();
            if candidate == "*" || candidate.eq_ignore_ascii_case(&extension) {
                return Some(folder);
            }
        }
    }

    None
}
