use std::fs;

use clap::Parser;
use graphcalc::{
    interpreter::evaluator::core::{Bindings, Context},
    parse_equation,
    plot::{grid::GridConfig, render::render_labeled},
};

/// graphcalc plots the curve where an equation in `x` and `y` equals zero.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells graphcalc to read the equation from a file.
    #[arg(short, long)]
    file: bool,

    /// Evaluates the equation at a single point instead of plotting it.
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    at: Option<Vec<f64>>,

    /// Smallest X coordinate of the window.
    #[arg(long, allow_negative_numbers = true)]
    start_x: Option<f64>,

    /// Smallest Y coordinate of the window.
    #[arg(long, allow_negative_numbers = true)]
    start_y: Option<f64>,

    /// Largest X coordinate of the window.
    #[arg(long, allow_negative_numbers = true)]
    end_x: Option<f64>,

    /// Largest Y coordinate of the window.
    #[arg(long, allow_negative_numbers = true)]
    end_y: Option<f64>,

    /// Distance between X samples.
    #[arg(long)]
    step_x: Option<f64>,

    /// Distance between Y samples.
    #[arg(long)]
    step_y: Option<f64>,

    #[arg(allow_hyphen_values = true)]
    contents: String,
}

impl Args {
    fn window(&self) -> GridConfig {
        let default = GridConfig::default();
        GridConfig { start_x: self.start_x.unwrap_or(default.start_x),
                     start_y: self.start_y.unwrap_or(default.start_y),
                     end_x:   self.end_x.unwrap_or(default.end_x),
                     end_y:   self.end_y.unwrap_or(default.end_y),
                     step_x:  self.step_x.unwrap_or(default.step_x),
                     step_y:  self.step_y.unwrap_or(default.step_y), }
    }
}

fn main() {
    let args = Args::parse();

    let equation = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let tree = parse_equation(equation.trim()).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    for warning in &tree.warnings {
        eprintln!("{warning}");
    }
    println!("{tree}");

    let mut context = Context::new();

    if let Some([x, y]) = args.at.as_deref() {
        let bindings = Bindings::from([('x', *x), ('y', *y)]);
        println!("{}", context.evaluate(&tree.root, &bindings));
    } else {
        match context.sample_grid(&tree.root, &args.window()) {
            Ok(grid) => {
                println!("=====");
                print!("{}", render_labeled(&grid));
                println!("=====");
            },
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }

    for warning in context.take_warnings() {
        eprintln!("{warning}");
    }
}
