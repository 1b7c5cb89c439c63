//! Layout Memo
//!
//! Holds the displacement sequence for one component instance and recomputes
//! it only when the item count or the intensity parameters change. An
//! instance is a page view under construction; the server builds a fresh one
//! per request, so memos are never shared across requests.

use tracing::debug;

use super::generator::{generate_layout, Displacement, LayoutIntensity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LayoutKey {
    count: usize,
    intensity_bits: [u64; 4],
}

impl LayoutKey {
    fn new(count: usize, intensity: &LayoutIntensity) -> Self {
        Self {
            count,
            intensity_bits: intensity.to_bits(),
        }
    }
}

/// Memoized layout owned by a single rendering component
#[derive(Debug, Default)]
pub struct LayoutMemo {
    cached: Option<(LayoutKey, Vec<Displacement>)>,
    computations: usize,
}

impl LayoutMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displacements(&mut self, count: usize, intensity: &LayoutIntensity) -> &[Displacement] {
        let key = LayoutKey::new(count, intensity);
        let fresh = matches!(&self.cached, Some((cached_key, _)) if *cached_key == key);

        if !fresh {
            debug!("Computing layout for {} items", count);
            self.cached = Some((key, generate_layout(count, intensity)));
            self.computations += 1;
        }

        match &self.cached {
            Some((_, layout)) => layout.as_slice(),
            None => &[],
        }
    }

    /// How many times the sequence has been generated
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn clear(&mut self) {
        self.cached = None;
    }
}
