use heapless::String;

/// Append as much of `text` as fits, stopping at a character boundary.
///
/// Returns `false` when anything was dropped.
pub(crate) fn push_bounded<const N: usize>(out: &mut String<N>, text: &str) -> bool {
    for ch in text.chars() {
        if out.push(ch).is_err() {
            return false;
        }
    }
    true
}

/// Replace the contents of `out` with as much of `text` as fits.
pub(crate) fn set_bounded<const N: usize>(out: &mut String<N>, text: &str) -> bool {
    out.clear();
    push_bounded(out, text)
}
