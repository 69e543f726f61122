//! Test doubles for the host boundary

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use backdrop_engine::color::{WARM_WHITE, WHITE};
use backdrop_engine::{Brush, Container, Pose, Size, Surface};

/// Population a draw call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Dot,
    Star,
    Sprinkle,
    Shape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    SetSize(Size),
    Clear,
    Alpha(f32),
    Draw(Group),
}

/// Surface that records every call instead of drawing
pub struct Recorder {
    pub size: Size,
    pub ops: Vec<Op>,
    pub draws: usize,
}

impl Recorder {
    /// Starts at the HTML canvas default of 300x150
    pub fn new() -> Self {
        Self { size: Size::new(300, 150), ops: Vec::new(), draws: 0 }
    }

    fn draw(&mut self, group: Group) {
        self.draws += 1;
        self.ops.push(Op::Draw(group));
    }
}

impl Surface for Recorder {
    fn set_size(&mut self, size: Size) {
        self.size = size;
        self.ops.push(Op::SetSize(size));
    }

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(Op::Alpha(alpha));
    }

    fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, brush: Brush) {
        let group = if brush.color == WHITE {
            Group::Dot
        } else {
            assert_eq!(brush.color, WARM_WHITE);
            Group::Star
        };
        self.draw(group);
    }

    fn stroke_segment(&mut self, _pose: Pose, _length: f32, _width: f32, _brush: Brush) {
        self.draw(Group::Sprinkle);
    }

    fn fill_polygon(&mut self, _pose: Pose, _scale: f32, _outline: &[(f32, f32)], _brush: Brush) {
        self.draw(Group::Shape);
    }
}

/// Container whose bounds the test can change after handing it over.
/// `None` means not mounted.
#[derive(Clone)]
pub struct Bounds(pub Rc<Cell<Option<Size>>>);

impl Bounds {
    pub fn mounted(width: u32, height: u32) -> Self {
        Self(Rc::new(Cell::new(Some(Size::new(width, height)))))
    }

    pub fn unmounted() -> Self {
        Self(Rc::new(Cell::new(None)))
    }

    pub fn set(&self, width: u32, height: u32) {
        self.0.set(Some(Size::new(width, height)));
    }
}

impl Container for Bounds {
    fn measure(&self) -> Option<Size> {
        self.0.get()
    }
}
