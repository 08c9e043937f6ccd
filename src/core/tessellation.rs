//! Zerlegung einer parametrischen Kurve in gerade Stücke.

use glam::Vec3;

/// Kleinste sinnvolle Auflösung: beide Endpunkte.
pub const MIN_RESOLUTION: usize = 2;

/// Wertet `eval` an `resolution` gleichverteilten Parametern in [0, 1] aus.
///
/// Erster und letzter Wert liegen exakt bei `t = 0` und `t = 1`.
/// Auflösungen unter [`MIN_RESOLUTION`] werden angehoben.
pub fn tessellate(eval: impl Fn(f32) -> Vec3, resolution: usize) -> Vec<Vec3> {
    let resolution = resolution.max(MIN_RESOLUTION);
    let last = (resolution - 1) as f32;
    (0..resolution)
        .map(|i| {
            let t = if i + 1 == resolution { 1.0 } else { i as f32 / last };
            eval(t)
        })
        .collect()
}
