//! Backend-agnostic draw description
//!
//! The simulation decides what is drawn and in which order; a backend only
//! turns the result into pixels. Order is back to front: platforms, goal
//! disks (largest first), then the actor sprite.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use glam::Vec2;

use crate::consts::{VIEW_HEIGHT, VIEW_WIDTH};
use crate::sim::{Color, Disk, Platform, Rect, Session, SpriteDraw};

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct FrameDraw {
    pub clear: Color,
    /// Visible world rectangle, centered on the camera
    pub view: Rect,
    pub platforms: Vec<Platform>,
    /// Goal disks in draw order
    pub goal: Vec<Disk>,
    pub actor: SpriteDraw,
}

impl FrameDraw {
    /// Describe the current state of `session`
    pub fn capture(session: &Session) -> Self {
        let actor = &session.physics.state;
        Self {
            clear: vertex::colors::BACKGROUND,
            view: Rect::from_center_size(session.camera, Vec2::new(VIEW_WIDTH, VIEW_HEIGHT)),
            platforms: session.level.platforms.clone(),
            goal: session.goal.disks().to_vec(),
            actor: session.animator.sprite(actor),
        }
    }

    /// Tessellate the colored geometry (platforms, then goal) in draw order
    ///
    /// The sprite is not included; it is drawn last from the sheet.
    pub fn vertices(&self, disk_segments: u32) -> Vec<Vertex> {
        let mut out = Vec::new();
        for p in &self.platforms {
            out.extend(shapes::rect(&p.rect, p.color));
        }
        for d in &self.goal {
            out.extend(shapes::disk(d.center, d.radius, disk_segments, d.color));
        }
        out
    }

    /// Uniform scale that fits the view into a `width` x `height` window
    pub fn fit_scale(&self, width: f32, height: f32) -> f32 {
        (width / self.view.width()).min(height / self.view.height())
    }
}
