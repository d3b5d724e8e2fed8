use crate::error::{SplineError, SplineResult};
use crate::knot::Knot;

/// Natural cubic spline over an editable set of [Knot]s.
///
/// Knots are kept sorted ascending by x; every mutation marks the cached
/// second derivatives stale, and the first evaluation afterwards rebuilds
/// them. Intended for small curves (tens to low hundreds of knots) that are
/// edited occasionally and queried many times.
pub struct Spline {
    knots: Vec<Knot>,
    z: Vec<f64>,
    min_x: f64,
    max_x: f64,
    dirty: bool,
}

impl Spline {
    /// Creates an empty spline.
    pub fn new() -> Self {
        Spline {
            knots: Vec::new(),
            z: Vec::new(),
            min_x: 0.0,
            max_x: 0.0,
            dirty: false,
        }
    }

    /// Inserts a knot, keeping knots ordered ascending by x.
    ///
    /// Returns `false` and leaves the spline untouched when a knot with the
    /// same x already exists; the spline is a function of x and can not hold
    /// two values there.
    /// # Example
    /// ```
    /// use keyframe_spline::{Knot, Spline};
    ///
    /// let mut spline = Spline::new();
    /// assert!(spline.add(Knot::new(2.0, 5.0)));
    /// assert!(!spline.add(Knot::new(2.0, 9.0)));
    /// ```
    pub fn add(&mut self, knot: Knot) -> bool {
        for existing in self.knots.iter() {
            if existing.get_x() >= knot.get_x() {
                if existing.get_x() == knot.get_x() {
                    return false;
                }
                // knots are sorted, no later knot can match
                break;
            }
        }

        let x = knot.get_x();
        self.knots.push(knot);

        if self.knots.len() == 1 {
            self.min_x = x;
            self.max_x = x;
        }

        let mut need_sort = true;
        if self.min_x > x {
            self.min_x = x;
        } else if self.max_x < x {
            self.max_x = x;
            // appended past the previous maximum, order is already correct
            need_sort = false;
        }

        if need_sort {
            self.knots.sort();
        }

        self.dirty = true;
        true
    }

    /// Removes the knot at `index`. Returns `false` when `index` is out of
    /// range.
    ///
    /// The remaining knots are re-added one at a time, so ordering, bounds
    /// and the rebuild flag are maintained by the single insertion path.
    /// Removal is O(n²).
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.knots.len() {
            return false;
        }

        self.knots.remove(index);
        let remaining = std::mem::take(&mut self.knots);

        self.dirty = true;
        for knot in remaining {
            self.add(knot);
        }

        true
    }

    /// Removes the knot whose x coordinate equals `x` exactly. Returns
    /// `false` when no knot matches.
    pub fn remove_at_x(&mut self, x: f64) -> bool {
        for index in 0..self.knots.len() {
            if self.knots[index].get_x() == x {
                return self.remove_at(index);
            }
        }

        false
    }

    /// Evaluates the curve at `x`.
    ///
    /// With fewer than 2 knots there is no curve yet and the result is
    /// `Ok(0.0)`; callers that need to distinguish this case check
    /// [Spline::len] first. Queries above the highest knot extrapolate the
    /// last cubic segment. Queries below the lowest knot fail with
    /// [SplineError::OutOfDomain].
    pub fn interpolate(&mut self, x: f64) -> SplineResult<f64> {
        let n = self.knots.len();
        if n <= 1 {
            return Ok(0.0);
        }

        if self.dirty {
            self.build_coef();
            self.dirty = false;
        }

        // greatest i whose knot x is at or below the query; the cubic piece
        // needs knot i + 1, so queries past the highest knot reuse the last
        // segment
        let mut segment = None;
        for i in (0..n).rev() {
            if x - self.knots[i].get_x() >= 0.0 {
                segment = Some(i.min(n - 2));
                break;
            }
        }

        let i = match segment {
            Some(i) => i,
            None => {
                return Err(SplineError::OutOfDomain {
                    requested: x,
                    min: self.min_x,
                })
            }
        };

        let h = self.knots[i + 1].get_x() - self.knots[i].get_x();

        let mut tmp = self.z[i] / 2.0
            + (x - self.knots[i].get_x()) * (self.z[i + 1] - self.z[i]) / (6.0 * h);
        tmp = -(h / 6.0) * (self.z[i + 1] + 2.0 * self.z[i])
            + (self.knots[i + 1].get_y() - self.knots[i].get_y()) / h
            + (x - self.knots[i].get_x()) * tmp;

        Ok(self.knots[i].get_y() + (x - self.knots[i].get_x()) * tmp)
    }

    /// Lowest knot x, `None` while the spline is empty.
    pub fn min_x(&self) -> Option<f64> {
        if self.knots.is_empty() {
            None
        } else {
            Some(self.min_x)
        }
    }

    /// Highest knot x, `None` while the spline is empty.
    pub fn max_x(&self) -> Option<f64> {
        if self.knots.is_empty() {
            None
        } else {
            Some(self.max_x)
        }
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Knots in ascending x order.
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    fn build_coef(&mut self) {
        let n = self.knots.len();

        self.z.clear();
        self.z.resize(n, 0.0);

        // two knots form a straight line; the natural boundary conditions
        // leave no curvature to solve for
        if n < 3 {
            return;
        }

        let mut h = vec![0.0; n];
        let mut b = vec![0.0; n];
        let mut u = vec![0.0; n];
        let mut v = vec![0.0; n];

        for i in 0..n - 1 {
            h[i] = self.knots[i + 1].get_x() - self.knots[i].get_x();
            b[i] = (self.knots[i + 1].get_y() - self.knots[i].get_y()) / h[i];
        }

        // forward elimination of the tridiagonal system
        u[1] = 2.0 * (h[0] + h[1]);
        v[1] = 6.0 * (b[1] - b[0]);

        for i in 2..n - 1 {
            u[i] = 2.0 * (h[i] + h[i - 1]) - h[i - 1] * h[i - 1] / u[i - 1];
            v[i] = 6.0 * (b[i] - b[i - 1]) - h[i - 1] * v[i - 1] / u[i - 1];
        }

        // back substitution; z[0] and z[n-1] are fixed by the natural
        // boundary condition
        self.z[n - 1] = 0.0;
        for i in (1..n - 1).rev() {
            self.z[i] = (v[i] - h[i] * self.z[i + 1]) / u[i];
        }
        self.z[0] = 0.0;
    }
}

impl Default for Spline {
    fn default() -> Self {
        Spline::new()
    }
}
