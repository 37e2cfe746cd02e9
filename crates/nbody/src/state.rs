use crate::body::{Body, BodyId};
use crate::error::NbodyError;
use nalgebra::{Point2, Vector2};

/// Complete state of an N-body system at a given time
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    /// Simulated time in seconds
    pub time: f64,
    /// Bodies still in play, in insertion order
    pub bodies: Vec<Body>,
    /// Next available body ID
    next_id: u32,
}

impl SystemState {
    /// Creates an empty system at t = 0
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::state::SystemState;
    ///
    /// let system = SystemState::new();
    /// assert_eq!(system.body_count(), 0);
    /// assert_eq!(system.time, 0.0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a system holding `bodies`, handing out fresh ids in order
    pub fn with_bodies(bodies: impl IntoIterator<Item = Body>) -> Self {
        let mut state = Self::new();
        for body in bodies {
            state.add_body(body);
        }
        state
    }

    /// Adds a body to the system and returns the ID it was given
    ///
    /// Whatever id the body carried before is replaced, so two bodies with
    /// identical fields still end up as distinct entities.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nbody::state::SystemState;
    ///
    /// let mut system = SystemState::new();
    /// let ball = Body::new(1e12, [100.0, 100.0], [0.0, 0.0], 1e9).unwrap();
    ///
    /// let a = system.add_body(ball);
    /// let b = system.add_body(ball);
    ///
    /// assert_ne!(a, b);
    /// assert_eq!(system.body_count(), 2);
    /// ```
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Returns the number of bodies in the system
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Returns the total mass of all bodies in kg
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Returns the vector sum of all momenta
    ///
    /// Constant for an isolated system up to integration drift.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    /// Returns orbital angular momentum about the origin plus every body's spin
    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies.iter().map(|b| b.angular_momentum()).sum()
    }

    /// Translational plus rotational kinetic energy of all bodies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Mass-weighted mean position
    ///
    /// # Errors
    ///
    /// [`NbodyError::EmptySystem`] when there are no bodies to average.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nbody::state::SystemState;
    ///
    /// let mut system = SystemState::new();
    /// system.add_body(Body::new(3.0, [0.0, 0.0], [0.0, 0.0], 1.0).unwrap());
    /// system.add_body(Body::new(1.0, [4.0, 8.0], [0.0, 0.0], 1.0).unwrap());
    ///
    /// let com = system.center_of_mass().unwrap();
    /// assert_eq!((com.x, com.y), (1.0, 2.0));
    ///
    /// assert!(SystemState::new().center_of_mass().is_err());
    /// ```
    pub fn center_of_mass(&self) -> Result<Point2<f64>, NbodyError> {
        if self.bodies.is_empty() {
            return Err(NbodyError::EmptySystem);
        }

        let weighted = self
            .bodies
            .iter()
            .map(|b| b.position.coords * b.mass)
            .fold(Vector2::zeros(), |acc, p| acc + p);

        Ok(Point2::from(weighted / self.total_mass()))
    }
}
