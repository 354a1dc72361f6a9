//! 2D-Kamera für die Darstellung der Zeichenfläche (Pan und Zoom).

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Welt-Koordinaten sind turtle-typisch: Ursprung in der Mitte, +y nach oben.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = Weltbereich passt genau in den Viewport)
    pub zoom: f32,
    /// Sichtbare Welt-Halbbreite bei Zoom 1.0
    pub world_extent: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.25;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 20.0;

    /// Erstellt eine Kamera, die `world_extent` Einheiten um den Ursprung zeigt.
    pub fn new(world_extent: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            world_extent: world_extent.max(1.0),
        }
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Zoomt so, dass der Weltpunkt unter `screen_pos` an seiner Stelle bleibt.
    pub fn zoom_towards(&mut self, factor: f32, screen_pos: Vec2, viewport_size: Vec2) {
        let before = self.screen_to_world(screen_pos, viewport_size);
        self.zoom_by(factor);
        let after = self.screen_to_world(screen_pos, viewport_size);
        self.position += before - after;
    }

    /// Setzt Pan und Zoom zurück.
    pub fn reset_view(&mut self) {
        self.position = Vec2::ZERO;
        self.zoom = 1.0;
    }

    /// Pixel pro Welteinheit. Die kürzere Viewport-Seite bestimmt den Maßstab.
    pub fn pixels_per_world(&self, viewport_size: Vec2) -> f32 {
        let short_side = viewport_size.x.min(viewport_size.y).max(1.0);
        short_side * self.zoom / (2.0 * self.world_extent)
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_size: Vec2) -> f32 {
        1.0 / self.pixels_per_world(viewport_size)
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (relativ zum Viewport).
    pub fn world_to_screen(&self, world_pos: Vec2, viewport_size: Vec2) -> Vec2 {
        let scale = self.pixels_per_world(viewport_size);
        let rel = world_pos - self.position;
        // Screen-Y zeigt nach unten, Welt-Y nach oben
        viewport_size * 0.5 + Vec2::new(rel.x, -rel.y) * scale
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, viewport_size: Vec2) -> Vec2 {
        let scale = self.pixels_per_world(viewport_size);
        let rel = (screen_pos - viewport_size * 0.5) / scale;
        Vec2::new(rel.x, -rel.y) + self.position
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new(220.0);
        camera.pan(Vec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_is_clamped() {
        let mut camera = Camera2D::new(220.0);
        camera.zoom_by(2.0);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(1000.0);
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MAX);
    }

    #[test]
    fn test_world_origin_maps_to_viewport_center() {
        let camera = Camera2D::new(220.0);
        let viewport = Vec2::new(800.0, 600.0);
        let screen = camera.world_to_screen(Vec2::ZERO, viewport);
        assert_relative_eq!(screen.x, 400.0);
        assert_relative_eq!(screen.y, 300.0);
    }

    #[test]
    fn test_positive_world_y_is_up_on_screen() {
        let camera = Camera2D::new(100.0);
        let viewport = Vec2::new(200.0, 200.0);
        // Obere Welt-Kante landet am oberen Bildschirmrand
        let top = camera.world_to_screen(Vec2::new(0.0, 100.0), viewport);
        assert_relative_eq!(top.y, 0.0);
        let right = camera.world_to_screen(Vec2::new(100.0, 0.0), viewport);
        assert_relative_eq!(right.x, 200.0);
    }

    #[test]
    fn test_screen_to_world_inverts_world_to_screen() {
        let mut camera = Camera2D::new(220.0);
        camera.pan(Vec2::new(12.0, -7.0));
        camera.zoom_by(1.5);
        let viewport = Vec2::new(640.0, 480.0);
        let world = Vec2::new(-150.0, 80.0);
        let back = camera.screen_to_world(camera.world_to_screen(world, viewport), viewport);
        assert_relative_eq!(back.x, world.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-3);
    }

    #[test]
    fn test_zoom_towards_keeps_point_under_cursor() {
        let mut camera = Camera2D::new(220.0);
        let viewport = Vec2::new(480.0, 520.0);
        let cursor = Vec2::new(400.0, 100.0);
        let anchor = camera.screen_to_world(cursor, viewport);

        camera.zoom_towards(2.0, cursor, viewport);

        assert_relative_eq!(camera.zoom, 2.0);
        let moved = camera.screen_to_world(cursor, viewport);
        assert_relative_eq!(moved.x, anchor.x, epsilon = 1e-3);
        assert_relative_eq!(moved.y, anchor.y, epsilon = 1e-3);
    }

    #[test]
    fn test_world_per_pixel() {
        let mut camera = Camera2D::new(200.0);
        let viewport = Vec2::new(400.0, 600.0);
        let wpp1 = camera.world_per_pixel(viewport);
        assert_relative_eq!(wpp1, 1.0);
        camera.zoom = 2.0;
        // Doppelter Zoom → halb so viele Welt-Einheiten pro Pixel
        assert_relative_eq!(camera.world_per_pixel(viewport), wpp1 / 2.0);
    }
}
