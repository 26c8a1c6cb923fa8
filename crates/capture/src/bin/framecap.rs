use {
    anyhow::{Context, Result, bail},
    base::{Level, log_info, log_warn},
    capture::{
        CaptureConfig, CapturePipeline, DEFAULT_PREFIX, MinifbSurface, SamplingMode,
        SessionReport, Surface, WINDOW_TITLE, tutorial,
    },
    clap::{Args, Parser, Subcommand},
    std::{path::PathBuf, time::Duration},
    video::V4l2Source,
};

// extra time allowed past countdown + duration before the controller stops the worker
const AUTO_STOP_GRACE: Duration = Duration::from_secs(3);

#[derive(Parser)]
#[command(name = "framecap", about = "Collect labeled webcam frames for hand-sign datasets")]
struct Cli {
    /// Log debug messages
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to daily files in this directory instead of stdout
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available cameras
    List {
        /// Number of camera indices to probe
        #[arg(long, default_value_t = 10)]
        max: usize,
    },
    /// Run one capture session
    Capture(CaptureArgs),
    /// Show the reference image for a letter
    Tutorial {
        letter: String,

        #[arg(long, default_value = tutorial::DEFAULT_TUTORIAL_DIR)]
        dir: PathBuf,
    },
}

#[derive(Args)]
struct CaptureArgs {
    /// Parent directory holding the A-Z folders
    #[arg(short, long)]
    out: PathBuf,

    /// Class folder; anything but a single letter becomes A
    #[arg(short, long, default_value = "A")]
    letter: String,

    #[arg(short, long, default_value_t = 0)]
    camera: usize,

    /// Save every Nth frame
    #[arg(long, conflicts_with = "fps")]
    stride: Option<u32>,

    /// Save at most this many frames per second
    #[arg(long)]
    fps: Option<f32>,

    /// Recording time in seconds, 0 for no limit
    #[arg(long, default_value_t = 5.0)]
    seconds: f32,

    /// Countdown before recording in seconds, 0 to skip
    #[arg(long, default_value_t = 5.0)]
    countdown: f32,

    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    #[arg(long, default_value = "jpg")]
    ext: String,

    #[arg(long, default_value_t = 95)]
    quality: u8,

    /// Record without a preview window (the countdown is still shown)
    #[arg(long)]
    no_preview: bool,
}

fn seconds(value: f32) -> Duration {
    Duration::try_from_secs_f32(value.max(0.0)).unwrap_or(Duration::MAX)
}

impl CaptureArgs {
    fn config(&self) -> CaptureConfig {
        let sampling = match (self.stride, self.fps) {
            (Some(stride), _) => SamplingMode::Stride(stride),
            (None, Some(fps)) => SamplingMode::Rate(fps),
            (None, None) => CaptureConfig::default().sampling(),
        };
        CaptureConfig::default()
            .with_output_parent(&self.out)
            .with_output_letter(self.letter.as_str())
            .with_camera_index(self.camera)
            .with_sampling(sampling)
            .with_max_duration(seconds(self.seconds))
            .with_countdown(seconds(self.countdown))
            .with_filename_prefix(self.prefix.as_str())
            .with_image_ext(self.ext.as_str())
            .with_jpeg_quality(self.quality)
            .with_preview(!self.no_preview)
    }
}

fn print_report(report: &SessionReport) {
    println!(
        "{:?} ({:?}): {} frames saved to {}",
        report.state,
        report.reason,
        report.saved,
        report.output_dir.display()
    );
    if report.failed_saves > 0 {
        println!("{} frames could not be saved", report.failed_saves);
    }
}

async fn run_capture(args: CaptureArgs) -> Result<()> {
    let config = args.config();
    let deadline = match config.max_duration().is_zero() {
        true => None,
        false => Some(config.countdown() + config.max_duration() + AUTO_STOP_GRACE),
    };

    let mut pipeline = CapturePipeline::new(config, Box::new(V4l2Source::default()))?
        .with_surface(MinifbSurface::factory(WINDOW_TITLE));
    log_info!("capturing into {}", pipeline.output_dir().display());
    pipeline.start();

    let mut poll = tokio::time::interval(Duration::from_millis(100));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let auto_stop = async {
        match deadline {
            Some(deadline) => tokio::time::sleep(deadline).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(auto_stop);

    let report = loop {
        tokio::select! {
            _ = poll.tick() => {
                if let Some(report) = pipeline.try_report() {
                    break Some(report);
                }
            }
            _ = &mut ctrl_c => {
                log_info!("interrupted, stopping capture");
                break tokio::task::block_in_place(|| pipeline.stop());
            }
            _ = &mut auto_stop => {
                log_warn!("capture still running after {:?}, stopping", deadline);
                break tokio::task::block_in_place(|| pipeline.stop());
            }
        }
    };

    match report {
        Some(report) => {
            print_report(&report);
            Ok(())
        }
        None => bail!("capture worker did not stop in time"),
    }
}

async fn show_tutorial(letter: &str, dir: PathBuf) -> Result<()> {
    let image = tutorial::load_tutorial(&dir, letter)?;
    let mut surface = MinifbSurface::new(format!("Tutorial {} - ESC to close", letter.trim()));
    loop {
        surface.show(&image)?;
        if surface.poll_key().is_some_and(|key| key.is_cancel()) {
            break;
        }
        tokio::time::sleep(Duration::from_millis(30)).await;
    }
    surface.close();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.log_dir {
        Some(dir) => base::init_file_logger(dir)
            .with_context(|| format!("cannot log to {}", dir.display()))?,
        None => base::init_stdout_logger(),
    }
    base::set_level(match cli.verbose {
        true => Level::Debug,
        false => Level::Info,
    });

    match cli.command {
        Command::List { max } => {
            let devices = video::enumerate(max);
            if devices.is_empty() {
                println!("no cameras found");
            }
            for device in devices {
                println!("{}", device.label());
            }
            Ok(())
        }
        Command::Capture(args) => run_capture(args).await,
        Command::Tutorial { letter, dir } => show_tutorial(&letter, dir).await,
    }
}
