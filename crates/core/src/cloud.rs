/// A named per-point scalar side-channel (sensor intensity, scan index, ...).
///
/// Channel order within a [`Cloud`] is significant and survives selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub name: String,
    pub values: Vec<f32>,
}

/// An ordered point sequence in a single coordinate frame, stored SoA.
///
/// Invariant: every channel's `values` has length equal to the point count.
/// The constructors and [`Cloud::push_channel`] enforce this.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
    pub channels: Vec<Channel>,
    pub frame_id: String,
    pub stamp: f64,
}

impl Cloud {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            channels: Vec::new(),
            frame_id: String::new(),
            stamp: 0.0,
        }
    }

    pub fn from_xyz(x: Vec<f32>, y: Vec<f32>, z: Vec<f32>) -> Self {
        assert_eq!(x.len(), y.len(), "x and y must have same length");
        assert_eq!(x.len(), z.len(), "x and z must have same length");

        Self {
            x,
            y,
            z,
            channels: Vec::new(),
            frame_id: String::new(),
            stamp: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.x.len(), self.y.len());
        debug_assert_eq!(self.x.len(), self.z.len());
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn point(&self, i: usize) -> [f32; 3] {
        [self.x[i], self.y[i], self.z[i]]
    }

    pub fn iter_points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((x, y), z)| [*x, *y, *z])
    }

    /// Appends a channel. Panics if the value count does not match the
    /// point count.
    pub fn push_channel(&mut self, name: impl Into<String>, values: Vec<f32>) {
        assert_eq!(
            values.len(),
            self.len(),
            "channel length must equal point count"
        );
        self.channels.push(Channel {
            name: name.into(),
            values,
        });
    }

    /// Values of the first channel with the given name, if present.
    pub fn channel(&self, name: &str) -> Option<&[f32]> {
        self.channels
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn has_channel(&self, name: &str) -> bool {
        self.channels.iter().any(|c| c.name == name)
    }

    /// Builds a new cloud from the points at `indices`, copying every
    /// channel's values at those positions. Frame and stamp carry over.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut x = Vec::with_capacity(indices.len());
        let mut y = Vec::with_capacity(indices.len());
        let mut z = Vec::with_capacity(indices.len());

        for &idx in indices {
            assert!(idx < self.len(), "index out of bounds in select");
            x.push(self.x[idx]);
            y.push(self.y[idx]);
            z.push(self.z[idx]);
        }

        let channels = self
            .channels
            .iter()
            .map(|c| Channel {
                name: c.name.clone(),
                values: indices.iter().map(|&idx| c.values[idx]).collect(),
            })
            .collect();

        Self {
            x,
            y,
            z,
            channels,
            frame_id: self.frame_id.clone(),
            stamp: self.stamp,
        }
    }

    /// Select all points NOT in the given index set.
    ///
    /// The complement of [`Cloud::select`]: returns the points at every
    /// index absent from `indices`, in ascending index order.
    ///
    /// # Panics
    ///
    /// Panics if any index in `indices` is out of bounds.
    pub fn select_inverse(&self, indices: &[usize]) -> Self {
        self.select(&crate::index::complement(self.len(), indices))
    }
}

impl Default for Cloud {
    fn default() -> Self {
        Self::new()
    }
}
