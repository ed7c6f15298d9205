//! The tree canvas: turns a press-and-release gesture into a painted tree

use crate::gen::{self, GrowthConfig, RandomSource};
use crate::palette::Palette;
use crate::surface::Surface;
use crate::{Float, Point};

/// The base of the tree, as drawn by the user
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Trunk {
    /// Where the pointer was pressed
    pub start: Point,
    /// Where the pointer was released. Branches grow from here
    pub end: Point,
}

impl Trunk {
    pub fn length(&self) -> Float {
        self.start.distance_to(self.end)
    }

    /// The direction from `start` to `end`, in radians
    pub fn angle(&self) -> Float {
        self.start.angle_to(self.end)
    }
}

/// How far along the press-and-release gesture we are
///
/// Only a completed gesture carries a [`Trunk`], so there's no way to paint branches without one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Gesture {
    /// Nothing has happened yet
    Idle,
    /// The pointer is down at this point, waiting to be released
    TrunkStarted(Point),
    TrunkComplete(Trunk),
}

/// The pointer events a canvas can receive
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Up(Point),
    Moved(Point),
    Entered,
    Exited,
}

/// Holds the state of a single tree painting
#[derive(Clone, Debug)]
pub struct TreeCanvas {
    gesture: Gesture,
    growth: GrowthConfig,
    palette: Palette,
    redraw_requested: bool,
}

impl TreeCanvas {
    pub fn new(growth: GrowthConfig, palette: Palette) -> Self {
        TreeCanvas {
            gesture: Gesture::Idle,
            growth,
            palette,
            redraw_requested: false,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Returns the trunk of the current tree, if a gesture has been completed
    pub fn trunk(&self) -> Option<&Trunk> {
        match &self.gesture {
            Gesture::TrunkComplete(trunk) => Some(trunk),
            _ => None,
        }
    }

    /// Dispatches a pointer event to the matching handler
    ///
    /// Movement and the pointer entering or leaving are ignored. Returns whether a redraw
    /// was requested.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(p) => {
                self.pointer_down(p);
                false
            }
            PointerEvent::Up(p) => self.pointer_up(p),
            PointerEvent::Moved(_) | PointerEvent::Entered | PointerEvent::Exited => false,
        }
    }

    /// Starts a new trunk at `p`, discarding any previous tree
    pub fn pointer_down(&mut self, p: Point) {
        tracing::debug!(x = p.x, y = p.y, "trunk started");
        self.gesture = Gesture::TrunkStarted(p);
    }

    /// Finishes the trunk at `p` and requests a redraw
    ///
    /// If the pointer was never pressed, there's no start point to pair with, so the release is
    /// ignored and no redraw is requested.
    pub fn pointer_up(&mut self, p: Point) -> bool {
        let start = match self.gesture {
            Gesture::TrunkStarted(start) => start,
            Gesture::Idle | Gesture::TrunkComplete(_) => {
                tracing::debug!(x = p.x, y = p.y, "ignoring release without a press");
                return false;
            }
        };

        let trunk = Trunk { start, end: p };
        tracing::debug!(
            length = trunk.length(),
            angle = trunk.angle(),
            "trunk complete"
        );

        self.gesture = Gesture::TrunkComplete(trunk);
        self.redraw_requested = true;
        true
    }

    /// Returns whether a redraw has been requested since the last call, clearing the request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::replace(&mut self.redraw_requested, false)
    }

    /// Paints the canvas onto `surface`
    ///
    /// The background is always filled. The trunk and everything grown from it are only drawn
    /// once a gesture has been completed. Returns the number of generated branch and blossom
    /// commands that were executed.
    pub fn render(&self, surface: &mut impl Surface, rng: &mut impl RandomSource) -> usize {
        surface.fill_background(self.palette.background);

        let trunk = match self.trunk() {
            Some(t) => t,
            None => return 0,
        };

        surface.draw_line(trunk.start, trunk.end, self.palette.trunk);

        let commands = gen::generate(
            trunk.end,
            trunk.length(),
            trunk.angle(),
            &self.growth,
            &self.palette,
            rng,
        );

        for cmd in &commands {
            surface.execute(cmd);
        }

        tracing::info!(
            commands = commands.len(),
            generations = self.growth.generations,
            "rendered tree"
        );

        commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float;
    use crate::gen::{Replay, RngSource};
    use crate::surface::{Recorder, SurfaceCall};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPSILON: Float = 1e-9;

    fn canvas() -> TreeCanvas {
        TreeCanvas::new(GrowthConfig::default(), Palette::default())
    }

    #[test]
    fn vertical_drag_makes_a_downward_trunk() {
        let mut canvas = canvas();
        canvas.pointer_down(Point::new(10.0, 10.0));
        assert!(canvas.pointer_up(Point::new(10.0, 110.0)));

        let trunk = *canvas.trunk().expect("gesture should be complete");
        assert!((trunk.length() - 100.0).abs() < EPSILON);
        assert!((trunk.angle() - float::FRAC_PI_2).abs() < EPSILON);

        let mut surface = Recorder::new();
        let n = canvas.render(&mut surface, &mut RngSource(StdRng::seed_from_u64(5)));

        let palette = Palette::default();
        assert_eq!(surface.calls[0], SurfaceCall::Background(palette.background));
        assert_eq!(
            surface.calls[1],
            SurfaceCall::Line {
                from: Point::new(10.0, 10.0),
                to: Point::new(10.0, 110.0),
                color: palette.trunk,
            }
        );

        // Every generated branch hangs off of the trunk's tip
        match surface.calls[2] {
            SurfaceCall::Line { from, .. } => assert_eq!(from, Point::new(10.0, 110.0)),
            other => panic!("expected a branch, got {:?}", other),
        }

        let (lines, dots) = GrowthConfig::default().expected_counts();
        assert_eq!(n, lines + dots);
        assert_eq!(surface.shape_counts(), (lines + 1, dots));
    }

    #[test]
    fn render_matches_generator_output() {
        let mut canvas = canvas();
        canvas.pointer_down(Point::new(200.0, 480.0));
        canvas.pointer_up(Point::new(220.0, 380.0));

        let values = vec![0.9, 0.1, 0.45, 0.3];
        let mut surface = Recorder::new();
        canvas.render(&mut surface, &mut Replay::new(values.clone()));

        let trunk = *canvas.trunk().expect("gesture should be complete");
        let expected = gen::generate(
            trunk.end,
            trunk.length(),
            trunk.angle(),
            &GrowthConfig::default(),
            &Palette::default(),
            &mut Replay::new(values),
        );

        let mut expected_surface = Recorder::new();
        for cmd in &expected {
            expected_surface.execute(cmd);
        }

        assert_eq!(&surface.calls[2..], &expected_surface.calls[..]);
    }

    #[test]
    fn nothing_but_background_before_release() {
        let mut canvas = canvas();
        let mut rng = Replay::new(vec![0.5]);

        let mut surface = Recorder::new();
        assert_eq!(canvas.render(&mut surface, &mut rng), 0);
        assert_eq!(surface.calls.len(), 1);

        canvas.pointer_down(Point::new(50.0, 50.0));
        assert_eq!(canvas.gesture(), Gesture::TrunkStarted(Point::new(50.0, 50.0)));
        assert!(!canvas.take_redraw_request());

        let mut surface = Recorder::new();
        assert_eq!(canvas.render(&mut surface, &mut rng), 0);
        assert_eq!(
            surface.calls,
            vec![SurfaceCall::Background(Palette::default().background)]
        );
        assert_eq!(surface.shape_counts(), (0, 0));
    }

    #[test]
    fn redrag_discards_previous_tree() {
        let mut canvas = TreeCanvas::new(
            GrowthConfig {
                generations: 3,
                ..GrowthConfig::default()
            },
            Palette::default(),
        );

        let first = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        canvas.pointer_down(first[0]);
        canvas.pointer_up(first[1]);
        assert!(canvas.take_redraw_request());

        canvas.pointer_down(Point::new(300.0, 400.0));
        assert_eq!(canvas.trunk(), None);
        canvas.pointer_up(Point::new(310.0, 300.0));
        assert!(canvas.take_redraw_request());
        assert!(!canvas.take_redraw_request());

        let mut surface = Recorder::new();
        canvas.render(&mut surface, &mut RngSource(StdRng::seed_from_u64(11)));

        // Lengths here are large enough that no branch can reach back to the first trunk
        assert!(surface.points().all(|p| !first.contains(&p)));
        assert_eq!(
            canvas.trunk().map(|t| t.start),
            Some(Point::new(300.0, 400.0))
        );
    }

    #[test]
    fn other_pointer_events_are_ignored() {
        let mut canvas = canvas();

        assert!(!canvas.handle(PointerEvent::Up(Point::new(1.0, 1.0))));
        assert_eq!(canvas.gesture(), Gesture::Idle);

        assert!(!canvas.handle(PointerEvent::Down(Point::new(5.0, 5.0))));
        for event in [
            PointerEvent::Moved(Point::new(7.0, 7.0)),
            PointerEvent::Entered,
            PointerEvent::Exited,
        ]
        .iter()
        {
            assert!(!canvas.handle(*event));
        }
        assert_eq!(canvas.gesture(), Gesture::TrunkStarted(Point::new(5.0, 5.0)));

        assert!(canvas.handle(PointerEvent::Up(Point::new(5.0, 25.0))));
        let complete = canvas.gesture();

        // A second release without a new press leaves the tree alone
        assert!(!canvas.handle(PointerEvent::Up(Point::new(90.0, 90.0))));
        assert_eq!(canvas.gesture(), complete);
    }
}
