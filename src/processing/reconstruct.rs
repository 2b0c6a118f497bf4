// src/processing/reconstruct.rs
//! Partial reconstruction from a cutoff onward

use crate::error::{DenoiseError, DenoiseResult};
use crate::processing::emd::ModeSet;
use crate::processing::types::Signal;

/// Sum of IMFs `cutoff..` plus the residue.
///
/// `cutoff == mode_count` keeps only the residue; anything larger is
/// [`DenoiseError::CutoffOutOfRange`].
pub fn reconstruct(modes: &ModeSet, cutoff: usize) -> DenoiseResult<Signal> {
    if cutoff > modes.mode_count() {
        return Err(DenoiseError::CutoffOutOfRange {
            cutoff,
            mode_count: modes.mode_count(),
        });
    }

    let mut output = modes.residue().to_vec();
    for mode in &modes.modes()[cutoff..] {
        for (o, m) in output.iter_mut().zip(mode.iter()) {
            *o += m;
        }
    }

    Ok(Signal::from_finite(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> ModeSet {
        let modes = vec![
            Signal::from_slice(&[1.0, -1.0, 1.0, -1.0]).unwrap(),
            Signal::from_slice(&[0.5, 0.5, -0.5, -0.5]).unwrap(),
            Signal::from_slice(&[0.2, 0.1, 0.0, -0.1]).unwrap(),
        ];
        ModeSet::new(modes, Signal::from_slice(&[3.0, 3.0, 3.0, 3.0]).unwrap()).unwrap()
    }

    #[test]
    fn test_cutoff_zero_is_total() {
        let modes = fixture();
        assert_eq!(reconstruct(&modes, 0).unwrap(), modes.total());
    }

    #[test]
    fn test_drops_leading_modes() {
        let output = reconstruct(&fixture(), 1).unwrap();
        let expected = [3.7, 3.6, 2.5, 2.4];
        for (o, e) in output.iter().zip(expected.iter()) {
            assert!((o - e).abs() < 1e-12, "{o} vs {e}");
        }
    }

    #[test]
    fn test_cutoff_at_mode_count_keeps_residue() {
        let modes = fixture();
        assert_eq!(&reconstruct(&modes, 3).unwrap(), modes.residue());
    }

    #[test]
    fn test_cutoff_out_of_range() {
        assert_eq!(
            reconstruct(&fixture(), 4),
            Err(DenoiseError::CutoffOutOfRange { cutoff: 4, mode_count: 3 })
        );
    }

    #[test]
    fn test_monotone_inclusion() {
        let modes = fixture();
        for k in 0..modes.mode_count() {
            let wide = reconstruct(&modes, k).unwrap();
            let narrow = reconstruct(&modes, k + 1).unwrap();
            for i in 0..modes.signal_len() {
                assert!((wide[i] - (narrow[i] + modes.modes()[k][i])).abs() < 1e-12);
            }
        }
    }
}
