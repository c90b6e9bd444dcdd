use std::io::IsTerminal;
use std::path::PathBuf;

use eyre::{Result, WrapErr};
use nxncube_core::{Cube, Face, Twist};
use nxncube_prefs::Preferences;
use nxncube_view::{CubeNet, LayoutText, read_layout_from};
use serde::Serialize;

/// nxncube command-line interface
///
/// If no subcommand is specified, a solved cube is printed before and after
/// turning its front face.
#[derive(Debug, clap::Parser)]
#[command(version, args_conflicts_with_subcommands = true)]
pub(crate) struct Args {
    /// Preferences file to load on top of the user preferences.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,
    /// Never emit ANSI color codes.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print a cube, optionally loaded from a layout file, after applying
    /// twists.
    Show {
        /// Edge length of the cube (inferred from the input if omitted).
        #[arg(short, long)]
        size: Option<usize>,
        /// Layout file to load, use '-' for stdin.
        #[arg(short, long, value_parser)]
        input: Option<clio::Input>,

        /// Print the cube as JSON.
        #[arg(long, conflicts_with = "layout")]
        json: bool,
        /// Print the cube in the layout format accepted by `--input`.
        #[arg(long)]
        layout: bool,

        /// Twists to apply, such as `F`, `U'`, or `front:2:-1`
        /// (`<face>[:<depth>][:<times>]`).
        twists: Vec<Twist>,
    },
    /// Load a layout and report whether it is solved and whether it is a
    /// possible cube. Fails if it is not.
    Check {
        /// Edge length of the cube (inferred from the input if omitted).
        #[arg(short, long)]
        size: Option<usize>,
        /// Layout file to check, use '-' for stdin.
        #[arg(short, long, value_parser)]
        input: clio::Input,
    },
    /// Print the path of the user preferences file.
    Prefs {
        /// Write the current preferences to the file if it does not exist.
        #[arg(long)]
        init: bool,
    },
}

/// Twist applied when no subcommand is given.
const DEMO_TWIST: Twist = Twist {
    face: Face::Front as usize,
    depth: 1,
    times: 1,
};

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = match &args.prefs {
        Some(path) => Preferences::load_with_file(path)?,
        None => Preferences::load(),
    };
    log::debug!("using preferences {prefs:?}");
    let color = !args.no_color && std::io::stdout().is_terminal();
    let print_net = |cube: &Cube| {
        let net = CubeNet::new(cube)
            .palette(prefs.palette)
            .show_digits(prefs.show_digits)
            .color(color);
        print!("{net}");
    };

    match args.subcommand {
        None => {
            let mut cube = Cube::new(prefs.size)?;
            print_net(&cube);
            println!();
            cube.apply(DEMO_TWIST)?;
            println!("{DEMO_TWIST}");
            print_net(&cube);
            Ok(())
        }

        Some(Subcommand::Show {
            size,
            input,
            json,
            layout,
            twists,
        }) => {
            let mut cube = match input {
                Some(input) => read_layout_from(input, size).wrap_err("error reading layout")?,
                None => Cube::new(size.unwrap_or(prefs.size))?,
            };
            cube.apply_all(twists).wrap_err("error applying twists")?;

            if json {
                write_json_output(&cube)
            } else if layout {
                print!("{}", LayoutText(&cube));
                Ok(())
            } else {
                print_net(&cube);
                Ok(())
            }
        }

        Some(Subcommand::Check { size, input }) => {
            let cube = read_layout_from(input, size).wrap_err("error reading layout")?;
            println!("solved: {}", cube.is_solved());
            cube.validate().wrap_err("cube is not correct")?;
            println!("correct: true");
            Ok(())
        }

        Some(Subcommand::Prefs { init }) => {
            let path = nxncube_prefs::prefs_file()?;
            println!("{}", path.display());
            if init && !path.exists() {
                prefs.save(path).wrap_err("error saving preferences")?;
            }
            Ok(())
        }
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .wrap_err("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
