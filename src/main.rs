use anyhow::{anyhow, bail, Context};
use getopts::Options;
use log::*;
use whitted::config::{self, Setup};
use whitted::image::Image;
use whitted::renderer::{RenderConfig, Renderer};
use whitted::state::{self, SceneState};
use whitted::*;

struct Args {
    scene: Option<String>,
    builtin: String,
    width: u32,
    height: u32,
    threads: usize,
    spp: usize,
    seed: u64,
    shadows: bool,
    keys: String,
    dt: f32,
    output: String,
    verbose: bool,
}

fn usage(program: &str, opts: &Options) -> String {
    let brief = format!("Usage: {} [options]", program);
    opts.usage(&brief)
}

fn parse_opt<T: std::str::FromStr>(
    matches: &getopts::Matches,
    name: &str,
    default: T,
) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match matches.opt_str(name) {
        Some(s) => s
            .parse()
            .map_err(|e| anyhow!("invalid value {:?} for --{}: {}", s, name, e)),
        None => Ok(default),
    }
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("s", "scene", "TOML scene file", "FILE");
    opts.optopt(
        "b",
        "builtin",
        &format!("built-in scene when no file is given ({})", example_scenes::NAMES.join(", ")),
        "NAME",
    );
    opts.optopt("W", "width", "image width in pixels (800)", "PX");
    opts.optopt("H", "height", "image height in pixels (600)", "PX");
    opts.optopt("t", "threads", "worker threads (number of CPUs)", "N");
    opts.optopt("n", "spp", "samples per pixel (1)", "N");
    opts.optopt("", "seed", "pixel jitter seed (0)", "N");
    opts.optflag("", "shadows", "cast shadow rays toward the light");
    opts.optopt(
        "k",
        "keys",
        "light movement, one frame per key (wasdqe, '.' for none) or per [group]",
        "SEQ",
    );
    opts.optopt("", "dt", "seconds between frames (0.1)", "SECONDS");
    opts.optopt("o", "output", "output EXR path (output.exr)", "PATH");
    opts.optflag("v", "verbose", "debug logging");
    opts.optflag("h", "help", "print this help");

    let matches = opts.parse(&args[1..]).context("parsing arguments")?;
    if matches.opt_present("h") {
        print!("{}", usage(&program, &opts));
        return Ok(None);
    }
    if !matches.free.is_empty() {
        bail!("unexpected arguments: {}\n{}", matches.free.join(" "), usage(&program, &opts));
    }

    Ok(Some(Args {
        scene: matches.opt_str("scene"),
        builtin: matches.opt_str("builtin").unwrap_or_else(|| "lab".to_owned()),
        width: parse_opt(&matches, "width", 800)?,
        height: parse_opt(&matches, "height", 600)?,
        threads: parse_opt(&matches, "threads", num_cpus::get())?,
        spp: parse_opt(&matches, "spp", 1)?,
        seed: parse_opt(&matches, "seed", 0)?,
        shadows: matches.opt_present("shadows"),
        keys: matches.opt_str("keys").unwrap_or_default(),
        dt: parse_opt(&matches, "dt", 0.1)?,
        output: matches.opt_str("output").unwrap_or_else(|| "output.exr".to_owned()),
        verbose: matches.opt_present("verbose"),
    }))
}

fn load(args: &Args) -> anyhow::Result<Setup> {
    match &args.scene {
        Some(path) => {
            config::load_scene(path).with_context(|| format!("loading scene {}", path))
        }
        None => match example_scenes::by_name(&args.builtin) {
            Some(setup) => Ok(setup?),
            None => bail!(
                "unknown built-in scene {:?}, expected one of {}",
                args.builtin,
                example_scenes::NAMES.join(", ")
            ),
        },
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.width == 0 || args.height == 0 {
        bail!("image dimensions must be positive, got {}x{}", args.width, args.height);
    }
    let mut image = Image::try_new(args.width, args.height)?;
    let frames = state::parse_keys(&args.keys)?;

    let Setup {
        mut scene,
        camera,
        mut trace,
    } = load(&args)?;
    trace.shadows |= args.shadows;
    info!(
        "{} objects, light at {:?}, depth {}, shadows {}",
        scene.objects().len(),
        scene.light().position,
        trace.max_depth,
        trace.shadows
    );

    let renderer = Renderer {
        trace,
        config: RenderConfig {
            nthread: args.threads,
            samples_per_pixel: args.spp,
            seed: args.seed,
        },
    };

    let mut state = SceneState::new(scene.light().position);
    let nframes = frames.len() + 1;
    for i in 0..nframes {
        if i > 0 {
            state.update(&frames[i - 1], args.dt);
            state.apply(&mut scene);
            debug!("frame {}: light at {:?}", i, state.light_position);
        }
        renderer.render(&scene, &camera, &mut image);

        let path = if nframes == 1 {
            args.output.clone()
        } else {
            util::numbered_path(&args.output, i)
        };
        image
            .write_exr(&path)
            .with_context(|| format!("writing {}", path))?;
        info!("wrote {}", path);
    }
    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(2);
        }
    };

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
