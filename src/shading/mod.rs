//! Selection between the flat and smooth normal sets of a solid.

use crate::math::Vector3;

/// Which precomputed normal set is exposed to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalMode {
    /// One normal per face, giving faceted shading.
    #[default]
    Flat,
    /// Normals averaged around each corner, giving continuous shading.
    Smooth,
}

impl NormalMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Flat => Self::Smooth,
            Self::Smooth => Self::Flat,
        }
    }
}

/// Owns the active normal snapshot handed to a rendering backend.
///
/// Selecting a mode copies the matching precomputed set into the snapshot;
/// nothing is recomputed. The switch does not know whether the snapshot has
/// been uploaded since the last change. Callers re-upload after every call to
/// [`NormalSwitch::select`].
#[derive(Debug, Clone)]
pub struct NormalSwitch {
    mode: NormalMode,
    active: Vec<Vector3>,
}

impl NormalSwitch {
    /// Creates a switch in [`NormalMode::Flat`] holding a copy of `flat`.
    #[must_use]
    pub fn new(flat: &[Vector3]) -> Self {
        Self {
            mode: NormalMode::Flat,
            active: flat.to_vec(),
        }
    }

    /// Overwrites the snapshot with the set belonging to `mode`.
    ///
    /// `flat` and `smooth` must have the snapshot's length.
    pub fn select(&mut self, mode: NormalMode, flat: &[Vector3], smooth: &[Vector3]) {
        let source = match mode {
            NormalMode::Flat => flat,
            NormalMode::Smooth => smooth,
        };
        debug_assert_eq!(source.len(), self.active.len());
        self.active.copy_from_slice(source);
        self.mode = mode;
        tracing::trace!(?mode, slots = self.active.len(), "normal mode selected");
    }

    /// The last selected mode.
    #[must_use]
    pub fn mode(&self) -> NormalMode {
        self.mode
    }

    /// The active normal snapshot.
    #[must_use]
    pub fn active(&self) -> &[Vector3] {
        &self.active
    }

    /// Mutable access for transforms that move every normal set at once.
    pub(crate) fn active_mut(&mut self) -> &mut [Vector3] {
        &mut self.active
    }
}
