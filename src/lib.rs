pub mod cli;
pub mod cmd;
pub mod config;
pub mod files;
pub mod handler;
pub mod logging;
pub mod path;
pub mod prompt;
pub mod workspace;

#[cfg(test)]
mod testing;

/// Converts a Path/PathBuf into String type.
/// Invalid unicode is replaced rather than panicking.
#[macro_export]
macro_rules! path_str {
    ($p:expr) => {
        $p.to_string_lossy().to_string()
    };
}
