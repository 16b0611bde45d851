use std::process::ExitCode;

use clap::{Parser, Subcommand};
use plotcalc::{
    EvalError, PlotRange, compile_function_of_x, evaluate_arithmetic_expression, evaluate_at,
    sample_plot, util::format::format_result,
};

/// plotcalc evaluates calculator expressions and samples functions of x for
/// plotting.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an arithmetic expression such as `2(3+4)` or `sqrt(2)*pi`.
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Evaluates a function of x, such as `f(x)=3sin(x)^2`, at one point.
    At {
        #[arg(allow_hyphen_values = true)]
        function: String,

        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    /// Samples a function of x and prints the points as `x,y` CSV lines.
    ///
    /// Points where the function is undefined are left out.
    Plot {
        #[arg(allow_hyphen_values = true)]
        function: String,

        /// Lower end of the sampled interval.
        #[arg(long, allow_negative_numbers = true, default_value_t = PlotRange::default().x_min)]
        x_min: f64,

        /// Upper end of the sampled interval.
        #[arg(long, allow_negative_numbers = true, default_value_t = PlotRange::default().x_max)]
        x_max: f64,

        /// Number of evenly spaced sample points.
        #[arg(long, default_value_t = PlotRange::default().count)]
        count: usize,
    },
}

fn run(command: Command) -> Result<(), EvalError> {
    match command {
        Command::Eval { expression } => {
            println!("{}", format_result(evaluate_arithmetic_expression(&expression)?));
        },
        Command::At { function, x } => {
            let expr = compile_function_of_x(&function)?;
            println!("{}", format_result(evaluate_at(&expr, x)?));
        },
        Command::Plot { function,
                        x_min,
                        x_max,
                        count, } => {
            let expr = compile_function_of_x(&function)?;
            let series = sample_plot(&expr, x_min, x_max, count)?;
            println!("x,y");
            for (x, y) in series {
                println!("{x},{y}");
            }
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
