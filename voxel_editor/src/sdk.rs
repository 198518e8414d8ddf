//! SDK entry points and builder for composing the voxel editor app.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::config::{self, EditorConfig};
use crate::model::{Lattice, LayerSelection, LayerView, PenColor};
use crate::render::{RendererResource, UnitCubeRenderer, VoxelAssetCache, VoxelRenderer};
use crate::scene::{
    apply_rotation_system, configure_gizmos, draw_outline_system, setup_scene,
    sync_voxels_system, trackball_input_system, trackball_sphere,
};
use crate::trackball::Trackball;
use crate::ui::{hud_plugin, panel_plugin};

/// Builder for constructing a voxel editor app with customizable plugins.
pub struct VoxelEditorBuilder {
    config: EditorConfig,
    renderer: Option<Box<dyn VoxelRenderer>>,
    lattice: Lattice,
    window_title: String,
    clear_color: Color,
    enable_hud: bool,
}

impl Default for VoxelEditorBuilder {
    fn default() -> Self {
        Self {
            config: EditorConfig::default(),
            renderer: None,
            lattice: Lattice::default(),
            window_title: "11x11x11 Blocks".to_string(),
            clear_color: Color::srgb_u8(190, 240, 210),
            enable_hud: true,
        }
    }
}

impl VoxelEditorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load window size, pen and layer from environment variables.
    pub fn from_env(mut self) -> Self {
        self.config = config::editor_config();
        self
    }

    /// Use an explicit configuration.
    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.config.resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Palette index the pen starts on.
    pub fn pen(mut self, index: usize) -> Self {
        self.config.pen = index;
        self
    }

    /// Slice shown in the grid at startup.
    pub fn layer(mut self, layer: LayerSelection) -> Self {
        self.config.layer = layer;
        self
    }

    /// Start from an existing model instead of an empty lattice.
    pub fn lattice(mut self, lattice: Lattice) -> Self {
        self.lattice = lattice;
        self
    }

    /// Provide a custom voxel renderer implementation.
    pub fn renderer(mut self, renderer: impl VoxelRenderer) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    /// Resources the editor systems run on, before any plugins.
    fn insert_state(&self, app: &mut App) {
        app.insert_resource(self.lattice.clone())
            .insert_resource(LayerView::new(self.config.layer))
            .insert_resource(PenColor::new(self.config.pen))
            .insert_resource(Trackball::new(trackball_sphere()))
            .init_resource::<VoxelAssetCache>();
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title.clone(),
                resolution: self.config.resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(self.clear_color));

        self.insert_state(&mut app);

        app.add_systems(Startup, (setup_scene, configure_gizmos))
            .add_systems(
                Update,
                (
                    trackball_input_system,
                    apply_rotation_system,
                    sync_voxels_system,
                    draw_outline_system,
                )
                    .chain(),
            )
            .add_plugins(panel_plugin);

        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(UnitCubeRenderer::default()));
        renderer.setup(&mut app);
        app.insert_resource(RendererResource(renderer));

        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }

        info!(
            "voxbox: editor ready, pen swatch {}, layer {}",
            self.config.pen, self.config.layer
        );
        app
    }
}
