//! Version and commit recorded by `build.rs`, rendered in the sidebar footer.

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes, dead_code)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub fn pkg_version() -> &'static str {
    built_info::PKG_VERSION
}

pub fn git_commit_hash() -> &'static str {
    match built_info::GIT_COMMIT_HASH {
        Some(hash) if !hash.is_empty() => hash,
        _ => "unknown",
    }
}

/// Abbreviates a commit hash to seven characters.
pub fn short_commit(hash: &str) -> &str {
    match hash.char_indices().nth(7) {
        Some((index, _)) => &hash[..index],
        None => hash,
    }
}

/// Footer label such as `v0.1.0 · 1a2b3c4`.
pub fn version_label() -> String {
    format!("v{} · {}", pkg_version(), short_commit(git_commit_hash()))
}
