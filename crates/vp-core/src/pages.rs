//! Page math: track length validation and splitting tracks into pages

use crate::target::TargetSpec;
use crate::PaginationError;

/// Common length of all tracks.
///
/// No tracks, or only empty tracks, count as length 0.
pub fn equal_length(tracks: &[Vec<TargetSpec>]) -> Result<usize, PaginationError> {
    if tracks.iter().all(|t| t.is_empty()) {
        return Ok(0);
    }
    let expected = tracks[0].len();
    match tracks.iter().position(|t| t.len() != expected) {
        Some(track) => Err(PaginationError::UnequalTracks {
            track,
            expected,
            found: tracks[track].len(),
        }),
        None => Ok(expected),
    }
}

/// Number of pages needed for `length` items per track
pub fn total_pages(length: usize, page_size: usize) -> usize {
    length.div_ceil(page_size.max(1))
}

/// Build pages from equal-length tracks.
///
/// Page `i` holds chunk `i` of every track, concatenated in track order.
pub fn split_into_pages(tracks: &[Vec<TargetSpec>], page_size: usize) -> Vec<Vec<TargetSpec>> {
    let page_size = page_size.max(1);
    let n_pages = tracks.first().map_or(0, |t| total_pages(t.len(), page_size));
    let mut pages = vec![Vec::new(); n_pages];
    for track in tracks {
        for (page, chunk) in pages.iter_mut().zip(track.chunks(page_size)) {
            page.extend_from_slice(chunk);
        }
    }
    pages
}
