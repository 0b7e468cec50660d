//! CLI adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::commands;
use crate::domain::{AppError, GenerateOptions, StderrDiagnostics};
use crate::services::host;

#[derive(Parser)]
#[command(name = "composegen")]
#[command(version)]
#[command(
    about = "Generate and incrementally update a Docker Compose service definition and its env file",
    long_about = "1. Generate template files (Docker Compose configuration, environment variables file, Docker entrypoint script...)\n2. Generate build arguments in the compose file according to the env file."
)]
struct Cli {
    /// Path to the Docker Compose file
    #[arg(long, default_value = "./docker-compose.yml")]
    compose_file: PathBuf,

    /// Path to the environment variables file
    #[arg(long, default_value = "./.env")]
    env_file: PathBuf,

    /// Name of the service
    #[arg(long)]
    service_name: String,

    /// Name of the image (default: <SERVICE_NAME>:latest)
    #[arg(long)]
    image: Option<String>,

    /// Name of the container (default: <SERVICE_NAME>)
    #[arg(long)]
    container_name: Option<String>,

    /// Rewrite build.args from the env file's marked regions and exit
    #[arg(long)]
    generate_build_args: bool,

    /// Clear the original docker-compose configuration
    #[arg(long)]
    from_scratch: bool,

    /// Share the host IPC namespace
    #[arg(long)]
    ipc_host: bool,

    /// Run the container privileged
    #[arg(long)]
    privileged: bool,

    /// Enable NVIDIA GPU support for the specified service
    #[arg(long)]
    nvidia: bool,

    /// CPU usage limit, e.g. 0.5 or 2 (default: half the host CPUs)
    #[arg(long, default_value_t = host::default_cpu_limit())]
    cpu_limit: f64,

    /// Memory usage limit, e.g. 512M or 1G (default: half the host memory)
    #[arg(long, default_value_t = host::default_memory_limit())]
    memory_limit: String,

    /// CPU reservation (default: 1/16 of the host CPUs)
    #[arg(long, default_value_t = host::default_cpu_reservation())]
    cpu_reservation: f64,

    /// Memory reservation, e.g. 256M or 1G (default: 1/16 of the host memory)
    #[arg(long, default_value_t = host::default_memory_reservation())]
    memory_reservation: String,

    /// Set environment variables and mount the socket related with Wayland
    #[arg(long)]
    wayland: bool,

    /// Set environment variables and mount the socket related with X11
    #[arg(long)]
    x11: bool,

    /// Set environment variables and mount the socket related with DBus
    #[arg(long)]
    dbus: bool,

    #[arg(long, default_value = "/tmp/.X11-unix:/tmp/.X11-unix:rw")]
    x11_socket_volume: String,

    /// X11 authority mount (default: derived from $XAUTHORITY)
    #[arg(long)]
    x11_authority_volume: Option<String>,

    #[arg(long, default_value = "$XDG_RUNTIME_DIR/$WAYLAND_DISPLAY:/tmp/$WAYLAND_DISPLAY:rw")]
    wayland_volume: String,

    #[arg(long, default_value = "/run/user/1000/bus:/run/user/1000/bus:rw")]
    dbus_volume: String,

    /// Extra volume specs appended after the generated set
    #[arg(long, num_args = 1..)]
    volumes_append: Vec<String>,

    /// Use an external entrypoint shell script
    #[arg(long)]
    entrypoint: bool,

    /// Path to the entrypoint shell script
    #[arg(long, default_value = "./entrypoint.sh")]
    entrypoint_path: PathBuf,

    /// Show debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> GenerateOptions {
        GenerateOptions {
            compose_file: self.compose_file,
            env_file: self.env_file,
            service_name: self.service_name,
            image: self.image,
            container_name: self.container_name,
            from_scratch: self.from_scratch,
            privileged: self.privileged,
            ipc_host: self.ipc_host,
            nvidia: self.nvidia,
            wayland: self.wayland,
            x11: self.x11,
            dbus: self.dbus,
            cpu_limit: self.cpu_limit,
            memory_limit: self.memory_limit,
            cpu_reservation: self.cpu_reservation,
            memory_reservation: self.memory_reservation,
            wayland_volume: self.wayland_volume,
            x11_socket_volume: self.x11_socket_volume,
            x11_authority_volume: self.x11_authority_volume,
            dbus_volume: self.dbus_volume,
            volumes_append: self.volumes_append,
            entrypoint: self.entrypoint,
            entrypoint_path: self.entrypoint_path,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let diag = StderrDiagnostics::new(cli.verbose);

    let result: Result<(), AppError> = if cli.generate_build_args {
        commands::build_args::execute(&cli.compose_file, &cli.env_file, &cli.service_name, &diag)
            .map(|_| ())
    } else {
        commands::generate::execute(&cli.into_options(), &diag)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
