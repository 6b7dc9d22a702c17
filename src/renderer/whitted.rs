use super::*;

/// Radiance arriving along `ray`. `stats.rays` counts every call of the
/// recursion, including the one that stops at the depth cutoff.
pub fn radiance(scene: &Scene, ray: &Ray, config: &TraceConfig, stats: &mut TraceStats) -> RGB {
    trace(scene, ray, config, 0, stats)
}

fn trace(
    scene: &Scene,
    ray: &Ray,
    config: &TraceConfig,
    depth: usize,
    stats: &mut TraceStats,
) -> RGB {
    stats.rays += 1;
    if depth > config.max_depth {
        return RGB::black();
    }

    let hit = match scene.test_hit(ray) {
        Some(hit) => hit,
        None => return RGB::black(),
    };
    let pos = hit.hit.pos;
    let normal = hit.hit.gnorm;
    let color = hit.albedo();
    let biased = pos + normal * config.bias;

    let ambient = color * config.ambient;

    let lit = !(config.shadows && scene.light_blocked(&biased));
    let diffuse = if lit {
        let light_dir = (scene.light().position - pos).normalize();
        color * normal.dot(&light_dir).max(0.0)
    } else {
        RGB::black()
    };

    let reflect_dir = reflect(&ray.dir, &normal).normalize();
    let reflected = trace(
        scene,
        &Ray::new(biased, reflect_dir),
        config,
        depth + 1,
        stats,
    );

    ambient + diffuse + reflected * config.reflectivity
}
