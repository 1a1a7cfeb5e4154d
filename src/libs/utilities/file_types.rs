// Installer artifact classification: which desktop-package procedure a downloaded
// file needs, and what to call it on disk.

use std::fmt;

use crate::schemas::tools::Os;

/// Desktop package formats the download driver knows how to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Dmg,
    Pkg,
    Deb,
    AppImage,
    Exe,
    Msi,
}

impl FileType {
    const BY_EXTENSION: [(&'static str, FileType); 6] = [
        (".dmg", FileType::Dmg),
        (".pkg", FileType::Pkg),
        (".deb", FileType::Deb),
        (".appimage", FileType::AppImage),
        (".exe", FileType::Exe),
        (".msi", FileType::Msi),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Dmg => "dmg",
            FileType::Pkg => "pkg",
            FileType::Deb => "deb",
            FileType::AppImage => "appimage",
            FileType::Exe => "exe",
            FileType::Msi => "msi",
        }
    }

    /// Default artifact format for an OS when the URL says nothing.
    pub fn default_for(os: Os) -> Option<FileType> {
        match os {
            Os::Darwin => Some(FileType::Dmg),
            Os::Linux => Some(FileType::Deb),
            Os::Windows => Some(FileType::Exe),
            Os::Other => None,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infers the artifact format from the extension of the URL's file name,
/// case-insensitively, falling back to the OS default. `None` means "unknown".
pub fn guess_file_type(url: &str, os: Os) -> Option<FileType> {
    let lower = file_name_from_url(url).to_lowercase();
    FileType::BY_EXTENSION
        .iter()
        .find(|(ext, _)| lower.ends_with(ext))
        .map(|(_, file_type)| *file_type)
        .or_else(|| FileType::default_for(os))
}

/// Placeholder used when a URL has no usable last segment.
pub const FALLBACK_FILE_NAME: &str = "download";

/// Last path segment of `url`, without query string or fragment.
pub fn file_name_from_url(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or_default();
    without_query
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string())
}
