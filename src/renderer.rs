use crate::camera::{Camera, PinHole};
use crate::image::*;
use crate::manager::*;
use crate::scene::Scene;
use crate::*;

use log::*;
use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::time::{Duration, Instant};

pub mod whitted;

#[derive(Clone, Debug)]
pub struct TraceConfig {
    /// Reflection bounces past this depth contribute black.
    pub max_depth: usize,
    pub ambient: f32,
    pub reflectivity: f32,
    /// Offset along the normal for rays leaving a surface.
    pub bias: f32,
    pub shadows: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            max_depth: 3,
            ambient: 0.1,
            reflectivity: 0.5,
            bias: 0.001,
            shadows: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraceStats {
    pub rays: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub nthread: usize,
    /// 1 samples the pixel centre; more jitters inside the pixel and averages.
    pub samples_per_pixel: usize,
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            nthread: num_cpus::get(),
            samples_per_pixel: 1,
            seed: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderStats {
    pub rays: u64,
    pub dropped_samples: u64,
    pub elapsed: Duration,
}

impl RenderStats {
    fn merge(&mut self, another: &Self) {
        self.rays += another.rays;
        self.dropped_samples += another.dropped_samples;
    }
}

/// Single-threaded render with the default pinhole and tracing constants.
pub fn render(scene: &Scene, camera_position: P3, width: u32, height: u32) -> Image {
    let mut image = Image::new(width, height);
    let renderer = Renderer {
        trace: TraceConfig::default(),
        config: RenderConfig {
            nthread: 1,
            ..Default::default()
        },
    };
    renderer.render(scene, &PinHole::new(camera_position), &mut image);
    image
}

#[derive(Clone, Debug, Default)]
pub struct Renderer {
    pub trace: TraceConfig,
    pub config: RenderConfig,
}

impl Renderer {
    /// Overwrites every pixel of `image`.
    pub fn render<C: Camera + Sync>(
        &self,
        scene: &Scene,
        camera: &C,
        image: &mut Image,
    ) -> RenderStats {
        let start = Instant::now();
        let nthread = self.config.nthread.max(1);
        let mut stats = if nthread == 1 {
            self.render_sequential(scene, camera, image)
        } else {
            self.render_parallel(scene, camera, image, nthread)
        };
        stats.elapsed = start.elapsed();
        info!(
            "rendered {}x{} with {} thread(s): {} rays in {:.2?}",
            image.w(),
            image.h(),
            nthread,
            stats.rays,
            stats.elapsed
        );
        if stats.dropped_samples > 0 {
            warn!("{} non-finite samples dropped", stats.dropped_samples);
        }
        stats
    }

    fn render_sequential<C: Camera>(
        &self,
        scene: &Scene,
        camera: &C,
        image: &mut Image,
    ) -> RenderStats {
        let (w, h) = (image.w(), image.h());
        let mut stats = RenderStats::default();
        for (row, pixels) in image.rows_mut().enumerate() {
            let task = Task {
                row: row as u32,
                pixels,
            };
            stats.merge(&self.render_row(scene, camera, task, w, h));
        }
        stats
    }

    fn render_parallel<C: Camera + Sync>(
        &self,
        scene: &Scene,
        camera: &C,
        image: &mut Image,
        nthread: usize,
    ) -> RenderStats {
        use std::thread;
        let (w, h) = (image.w(), image.h());
        let manager = Manager::new(image);
        let manager = &manager;
        let mut stats = RenderStats::default();
        thread::scope(|s| {
            let mut threads = vec![];
            for thread_id in 0..nthread {
                let thread = s.spawn(move || {
                    let mut stats = RenderStats::default();
                    while let Some(task) = manager.next() {
                        let row = task.row;
                        stats.merge(&self.render_row(scene, camera, task, w, h));
                        debug!(
                            "thread {} finished row {}/{}",
                            thread_id,
                            row + 1,
                            manager.total()
                        );
                    }
                    stats
                });
                threads.push(thread);
            }
            for thread in threads {
                let thread_stats = thread
                    .join()
                    .unwrap_or_else(|e| std::panic::resume_unwind(e));
                stats.merge(&thread_stats);
            }
        });
        stats
    }

    fn render_row<C: Camera + ?Sized>(
        &self,
        scene: &Scene,
        camera: &C,
        task: Task<'_>,
        w: u32,
        h: u32,
    ) -> RenderStats {
        let spp = self.config.samples_per_pixel.max(1);
        let seed = self.config.seed.wrapping_add(u64::from(task.row));
        let mut rng = SmallRng::seed_from_u64(seed);
        let jitter = Uniform::new(0.0f32, 1.0);
        let mut stats = RenderStats::default();
        let Task { row: yi, pixels } = task;

        for (xi, pixel) in pixels.iter_mut().enumerate() {
            let mut accum = RGB::black();
            let mut samples = 0;
            for _ in 0..spp {
                let (jx, jy) = if spp == 1 {
                    (0.5, 0.5)
                } else {
                    (jitter.sample(&mut rng), jitter.sample(&mut rng))
                };
                let u = (xi as f32 + jx) / w as f32 * 2.0 - 1.0;
                let v = (yi as f32 + jy) / h as f32 * 2.0 - 1.0;
                let ray = camera.ray_to(u, v);

                let mut trace_stats = TraceStats::default();
                let radiance = whitted::radiance(scene, &ray, &self.trace, &mut trace_stats);
                stats.rays += trace_stats.rays;
                if radiance.is_finite() {
                    accum += radiance;
                    samples += 1;
                } else {
                    trace!("radiance is not finite at ({}, {}): {:?}", xi, yi, radiance);
                    stats.dropped_samples += 1;
                }
            }
            *pixel = if samples > 0 {
                accum / samples as f32
            } else {
                RGB::black()
            };
        }
        stats
    }
}
