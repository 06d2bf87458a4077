/**
 * The point capability the tree indexes.
 *
 * The tree never owns, copies or moves the coordinates of a point. It keeps a
 * handle (a reference or a shared pointer) and reads the coordinates through
 * `Position` whenever it needs to descend. Handles are compared by identity,
 * so two distinct points at the same coordinates are two distinct entries.
 */
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use crate::Coordinate;

/// Read access to a point's current coordinates.
pub trait Position {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x(), self.y())
    }
}

/// A cheap, clonable reference to a caller-owned point.
pub trait PointHandle: Position + Clone {
    /// True iff both handles refer to the same point object.
    fn same_point(&self, other: &Self) -> bool;
}

/// Caller-side mutation of a point that may be tracked by a tree.
///
/// After relocating a tracked point, call `Quadtree::update` with its handle.
pub trait Relocate: Position {
    fn relocate(&self, x: f64, y: f64);
}

impl Position for Coordinate {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl Position for Cell<Coordinate> {
    fn x(&self) -> f64 {
        self.get().x
    }

    fn y(&self) -> f64 {
        self.get().y
    }

    fn coordinate(&self) -> Coordinate {
        self.get()
    }
}

impl<P: Position> Position for RefCell<P> {
    fn x(&self) -> f64 {
        self.borrow().x()
    }

    fn y(&self) -> f64 {
        self.borrow().y()
    }
}

impl<P: Position + ?Sized> Position for &P {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl<P: Position + ?Sized> Position for Rc<P> {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl<P: Position + ?Sized> Position for Arc<P> {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl<'a, P: Position + ?Sized> PointHandle for &'a P {
    fn same_point(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<P: Position + ?Sized> PointHandle for Rc<P> {
    fn same_point(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<P: Position + ?Sized> PointHandle for Arc<P> {
    fn same_point(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl Relocate for Cell<Coordinate> {
    fn relocate(&self, x: f64, y: f64) {
        self.set(Coordinate::new(x, y));
    }
}

impl Relocate for RefCell<Coordinate> {
    fn relocate(&self, x: f64, y: f64) {
        *self.borrow_mut() = Coordinate::new(x, y);
    }
}
