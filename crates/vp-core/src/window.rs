//! Visible window of navigation links

/// Which of `n_links` links stay visible around `current`.
///
/// Links are scanned left to right. A link is hidden when it sits more than
/// `maximum / 2` positions before `current`, or once more than `maximum`
/// links have been shown; at most `maximum + 1` links end up visible. The
/// window is biased to the right of `current`, not centered.
pub fn link_window(current: usize, n_links: usize, maximum: usize) -> Vec<bool> {
    let mut revealed = 0usize;
    (0..n_links)
        .map(|j| {
            // current - j > maximum / 2, kept in integers
            let too_far_behind = j < current && (current - j) * 2 > maximum;
            if too_far_behind || revealed > maximum {
                false
            } else {
                revealed += 1;
                true
            }
        })
        .collect()
}
