//! Central system ordering labels to make the per-frame sequence explicit.
//! Both sets run in `Update`:
//! 1. PrePhysics (input sampling / orb spawning)
//! 2. PostPhysicsAdjust (culling, drawing)
//! The Rapier plugin itself steps in `PostUpdate`, after both sets, so
//! PostPhysicsAdjust works against the transforms written back at the end of
//! the previous frame. Within a frame, spawning still strictly precedes
//! culling and drawing.
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // input and spawning, before any adjustment passes

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // culling and drawing against the latest writeback
