//! SceneView: composes one first-person frame of a `core::World` into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Draw order is fixed and later layers overwrite earlier ones:
//! walls/floor/sky, enemies, HUD, mini-map, projectiles and their trails.

use crate::core::projection::{ground_glyph, project_point, wall_band, RowKind, WallShade};
use crate::core::{cast_columns, RayHit, Tile, World};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{MAP_HEIGHT, MAP_WIDTH, MAX_VIEW_HEIGHT, MAX_VIEW_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Clamp to the maximum design resolution.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.min(MAX_VIEW_WIDTH),
            height: self.height.min(MAX_VIEW_HEIGHT),
        }
    }
}

/// Per-frame numbers the HUD shows that the world does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudStats {
    pub fps: u32,
}

/// Mini-map size in cells, excluding its border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniMap {
    pub width: u16,
    pub height: u16,
}

impl MiniMap {
    /// Outer size including the one-cell border
    pub fn footprint(&self) -> (u16, u16) {
        (self.width + 2, self.height + 2)
    }

    /// Whether the overlay fits beside the HUD row without clipping.
    pub fn fits(&self, viewport: Viewport) -> bool {
        let (fw, fh) = self.footprint();
        self.width > 0 && self.height > 0 && viewport.width > fw && viewport.height > fh
    }

    /// Map cell sampled by mini-map cell `(mx, my)`.
    ///
    /// Integer division, so non-divisor sizes skip or repeat some map cells.
    pub fn sample(&self, mx: u16, my: u16) -> (i32, i32) {
        (
            (mx as u32 * MAP_WIDTH as u32 / self.width as u32) as i32,
            (my as u32 * MAP_HEIGHT as u32 / self.height as u32) as i32,
        )
    }

    /// Mini-map cell containing a world position.
    pub fn locate(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let mx = (x * self.width as f32 / MAP_WIDTH as f32) as u16;
        let my = (y * self.height as f32 / MAP_HEIGHT as f32) as u16;
        (mx < self.width && my < self.height).then_some((mx, my))
    }
}

impl Default for MiniMap {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH as u16,
            height: MAP_HEIGHT as u16,
        }
    }
}

const BACKGROUND: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const GROUND: CellStyle = CellStyle::fg(Rgb::new(130, 105, 70));
const ENEMY: CellStyle = CellStyle::fg(Rgb::new(230, 60, 50)).bold();
const HUD_LABEL: CellStyle = CellStyle::fg(Rgb::new(240, 240, 240)).bold();
const HUD_VALUE: CellStyle = CellStyle::fg(Rgb::new(250, 210, 90));
const CROSSHAIR: CellStyle = CellStyle::fg(Rgb::new(120, 255, 120)).bold();
const MAP_BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const MAP_WALL: CellStyle = CellStyle::fg(Rgb::new(170, 170, 180));
const MAP_FLOOR: CellStyle = CellStyle::fg(Rgb::new(90, 90, 100)).dim();
const MAP_PLAYER: CellStyle = CellStyle::fg(Rgb::new(120, 255, 120)).bold();
const MAP_ENEMY: CellStyle = CellStyle::fg(Rgb::new(230, 60, 50));
const PROJECTILE: CellStyle = CellStyle::fg(Rgb::new(255, 220, 60)).bold();

/// Trail colors, newest first.
const TRAIL: [CellStyle; 4] = [
    CellStyle::fg(Rgb::new(255, 180, 40)),
    CellStyle::fg(Rgb::new(220, 130, 30)),
    CellStyle::fg(Rgb::new(170, 90, 20)).dim(),
    CellStyle::fg(Rgb::new(120, 60, 10)).dim(),
];

fn wall_style(shade: WallShade) -> CellStyle {
    let v = match shade {
        WallShade::Solid => 235,
        WallShade::Dark => 195,
        WallShade::Medium => 155,
        WallShade::Light => 115,
        WallShade::Empty => 0,
    };
    CellStyle::fg(Rgb::gray(v))
}

/// First-person renderer for a [`World`].
#[derive(Debug, Clone)]
pub struct SceneView {
    minimap: MiniMap,
    show_minimap: bool,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            minimap: MiniMap::default(),
            show_minimap: true,
        }
    }
}

impl SceneView {
    pub fn new(minimap: MiniMap) -> Self {
        Self {
            minimap,
            show_minimap: true,
        }
    }

    pub fn with_minimap_visible(mut self, visible: bool) -> Self {
        self.show_minimap = visible;
        self
    }

    pub fn minimap_visible(&self) -> bool {
        self.show_minimap
    }

    pub fn toggle_minimap(&mut self) {
        self.show_minimap = !self.show_minimap;
    }

    pub fn minimap(&self) -> MiniMap {
        self.minimap
    }

    /// Render the world into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, world: &World, hud: &HudStats, viewport: Viewport, fb: &mut FrameBuffer) {
        let viewport = viewport.clamped();
        fb.resize(viewport.width, viewport.height);
        fb.clear(BACKGROUND.into_cell(' '));

        self.draw_walls(fb, world, viewport);
        self.draw_enemies(fb, world, viewport);
        self.draw_hud(fb, world, hud, viewport);
        if self.show_minimap && self.minimap.fits(viewport) {
            self.draw_minimap(fb, world, viewport);
        }
        self.draw_projectiles(fb, world, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, world: &World, hud: &HudStats, viewport: Viewport) -> FrameBuffer {
        let viewport = viewport.clamped();
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, hud, viewport, &mut fb);
        fb
    }

    fn draw_walls(&self, fb: &mut FrameBuffer, world: &World, viewport: Viewport) {
        let mut rays = [RayHit::MISS; MAX_VIEW_WIDTH as usize];
        let rays = &mut rays[..viewport.width as usize];
        let p = &world.player;
        cast_columns(&world.map, p.x, p.y, p.heading, p.fov, rays);

        for (x, hit) in rays.iter().enumerate() {
            let band = wall_band(hit.distance, viewport.height);
            let shade = WallShade::from_distance(hit.distance);
            let wall = wall_style(shade).into_cell(shade.glyph());

            for y in 0..viewport.height {
                let cell = match band.row_kind(y as i32) {
                    RowKind::Sky => continue,
                    RowKind::Wall => wall,
                    RowKind::Ground => GROUND.into_cell(ground_glyph(y, viewport.height)),
                };
                fb.set(x as u16, y, cell);
            }
        }
    }

    fn draw_enemies(&self, fb: &mut FrameBuffer, world: &World, viewport: Viewport) {
        for enemy in world.enemies.iter().filter(|e| e.alive) {
            let Some(sprite) =
                project_point(&world.player, enemy.x, enemy.y, viewport.width, viewport.height)
            else {
                continue;
            };

            // Half as wide as tall, at least one cell so distant enemies stay visible.
            let h = sprite.size.max(1);
            let w = (sprite.size / 2).max(1);
            let left = sprite.column as i32 - sprite.size / 4;
            fb.fill_rect(left, sprite.top(viewport.height), w, h, 'E', ENEMY);
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, world: &World, hud: &HudStats, viewport: Viewport) {
        fb.put_char(viewport.width / 2, viewport.height / 2, '+', CROSSHAIR);

        let mut x = fb.put_str(0, 0, "FPS ", HUD_LABEL);
        x = fb.put_u32(x, 0, hud.fps, HUD_VALUE);
        x = fb.put_str(x, 0, " | ENEMIES ", HUD_LABEL);
        x = fb.put_u32(x, 0, world.alive_enemies() as u32, HUD_VALUE);
        x = fb.put_str(x, 0, "/", HUD_LABEL);
        x = fb.put_u32(x, 0, world.enemies.len() as u32, HUD_VALUE);
        x = fb.put_str(x, 0, " | SHOTS ", HUD_LABEL);
        x = fb.put_u32(x, 0, world.stats.shots_fired, HUD_VALUE);
        x = fb.put_str(x, 0, " | KILLS ", HUD_LABEL);
        fb.put_u32(x, 0, world.stats.kills, HUD_VALUE);
    }

    fn draw_minimap(&self, fb: &mut FrameBuffer, world: &World, viewport: Viewport) {
        let (fw, fh) = self.minimap.footprint();
        let start_x = viewport.width - fw;
        let start_y = 1;

        self.draw_border(fb, start_x, start_y, fw, fh, MAP_BORDER);

        let inner_x = start_x + 1;
        let inner_y = start_y + 1;
        for my in 0..self.minimap.height {
            for mx in 0..self.minimap.width {
                let (cx, cy) = self.minimap.sample(mx, my);
                let tile = world.map.get(cx, cy);
                let style = match tile {
                    Some(Tile::Wall) => MAP_WALL,
                    _ => MAP_FLOOR,
                };
                let ch = tile.map(|t| t.glyph()).unwrap_or(' ');
                fb.put_char(inner_x + mx, inner_y + my, ch, style);
            }
        }

        for enemy in world.enemies.iter().filter(|e| e.alive) {
            if let Some((mx, my)) = self.minimap.locate(enemy.x, enemy.y) {
                fb.put_char(inner_x + mx, inner_y + my, 'e', MAP_ENEMY);
            }
        }
        if let Some((mx, my)) = self.minimap.locate(world.player.x, world.player.y) {
            fb.put_char(inner_x + mx, inner_y + my, 'P', MAP_PLAYER);
        }
    }

    fn draw_projectiles(&self, fb: &mut FrameBuffer, world: &World, viewport: Viewport) {
        let row = viewport.height / 2;
        let p = &world.player;

        for proj in world.projectiles.iter_active() {
            // Oldest sample first so newer ones win where they overlap.
            for (age, (tx, ty)) in proj.trail.iter().rev() {
                if let Some(s) = project_point(p, tx, ty, viewport.width, viewport.height) {
                    let style = TRAIL[age.min(TRAIL.len() - 1)];
                    fb.put_char(s.column, row, '·', style);
                }
            }
            if let Some(s) = project_point(p, proj.x, proj.y, viewport.width, viewport.height) {
                fb.put_char(s.column, row, '*', PROJECTILE);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_clamps_to_design_resolution() {
        assert_eq!(Viewport::new(300, 90).clamped(), Viewport::new(120, 40));
        assert_eq!(Viewport::new(80, 24).clamped(), Viewport::new(80, 24));
    }

    #[test]
    fn minimap_sampling_is_identity_at_full_size() {
        let mm = MiniMap::default();
        assert_eq!(mm.sample(0, 0), (0, 0));
        assert_eq!(mm.sample(15, 7), (15, 7));
        assert_eq!(mm.locate(8.4, 3.9), Some((8, 3)));
        assert_eq!(mm.locate(16.0, 3.0), None);
    }

    #[test]
    fn minimap_sampling_downscales_with_integer_division() {
        let mm = MiniMap { width: 5, height: 5 };
        // 16/5: columns 0,3,6,9,12 are sampled.
        let xs: Vec<i32> = (0..5).map(|mx| mm.sample(mx, 0).0).collect();
        assert_eq!(xs, vec![0, 3, 6, 9, 12]);
    }

    #[test]
    fn zero_sized_viewport_does_not_panic() {
        let world = World::new();
        let fb = SceneView::default().render(&world, &HudStats::default(), Viewport::new(0, 0));
        assert_eq!(fb.width(), 0);
        assert!(fb.cells().is_empty());
    }
}
