//! Arithmetic helpers over resource URLs.
//!
//! Resources are `file://` style URLs whose path component carries the
//! filesystem location. Directory URLs are expected without a trailing
//! slash; helpers tolerate one by treating the last non-empty segment as
//! the basename.

use url::Url;

/// Upper bound on parent-directory ascents. Malformed URLs whose parent
/// derivation never reaches a fixpoint stop here instead of looping.
const MAX_ASCENT: usize = 128;

/// Last non-empty path segment of a URL, or `""` at the filesystem root.
#[must_use]
pub fn basename(uri: &Url) -> &str {
    uri.path_segments()
        .and_then(|segments| segments.rev().find(|s| !s.is_empty()))
        .unwrap_or("")
}

/// Parent directory of a URL. The root is its own parent.
#[must_use]
pub fn dirname(uri: &Url) -> Url {
    if basename(uri).is_empty() {
        return uri.clone();
    }

    let mut parent = uri.clone();
    if let Ok(mut segments) = parent.path_segments_mut() {
        segments.pop_if_empty().pop();
    }
    parent
}

/// Top-level ancestor directory of a URL: the directory whose parent has an
/// empty basename (the filesystem root's immediate child).
///
/// A URL already at top level is returned unchanged.
#[must_use]
pub fn top_level_dir(uri: &Url) -> Url {
    let mut current = uri.clone();

    for _ in 0..MAX_ASCENT {
        let parent = dirname(&current);
        if basename(&parent).is_empty() {
            break;
        }
        current = parent;
    }

    current
}

/// Resolve a relative-or-absolute path string against a base directory URL.
///
/// When the first segment of the path equals the basename of the base, the
/// path is taken to start one level above the base, so `/foo/bar` plus
/// `bar/baz` yields `/foo/bar/baz` rather than `/foo/bar/bar/baz`. The check
/// repeats against each stripped base and stops at the root.
///
/// Absolute paths replace the base's path outright; relative paths are
/// appended segment by segment.
#[must_use]
pub fn resolve_path(base: &Url, path: &str) -> Url {
    let head = head_segment(path);
    let mut base = base.clone();

    if !head.is_empty() {
        for _ in 0..MAX_ASCENT {
            if basename(&base) != head {
                break;
            }
            let parent = dirname(&base);
            if parent == base {
                break;
            }
            base = parent;
        }
    }

    if path.starts_with('/') {
        let mut resolved = base;
        resolved.set_path(path);
        return resolved;
    }

    join(&base, path)
}

/// First non-empty `/`-separated segment of a path string.
fn head_segment(path: &str) -> &str {
    path.split('/').find(|s| !s.is_empty()).unwrap_or("")
}

/// Append the segments of a relative path to a base URL.
fn join(base: &Url, path: &str) -> Url {
    let mut joined = base.clone();
    if let Ok(mut segments) = joined.path_segments_mut() {
        segments.pop_if_empty();
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
    }
    joined
}
