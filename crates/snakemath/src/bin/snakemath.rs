//! Command-line front end for the SnakeMath calculators.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use snakemath::combinatorics::MAX_EXACT_FACTORIAL;
use snakemath::{
    combinations, describe, evaluate_angle, evaluate_product_by_id, factorial, factorial_approx,
    parse_data, permutations, solve_quadratic, solve_right_triangle, DisplayContext, KnownValues,
    Render, RightTriangle, SpecialTriangle,
};

#[derive(Parser)]
#[command(name = "snakemath")]
#[command(about = "Calculators from the SnakeMath algebra, statistics and trigonometry pages")]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Decimal places shown in human-readable output
    #[arg(long, global = true, default_value_t = snakemath::context::DEFAULT_PRECISION)]
    precision: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// n! (exact up to 34!, use --approx beyond)
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Floating-point approximation instead of the exact value
        #[arg(long)]
        approx: bool,
    },
    /// Ordered arrangements P(n, r)
    Permutations {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        #[arg(allow_negative_numbers = true)]
        r: i64,
    },
    /// Unordered selections C(n, r)
    Combinations {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        #[arg(allow_negative_numbers = true)]
        r: i64,
    },
    /// Evaluate a product ∏ over an inclusive range
    Product {
        /// factorial, even, odd, powers-of-2 or telescoping
        expression: String,
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        end: i64,
    },
    /// Solve a right triangle from two known values
    Triangle {
        /// Leg opposite angle A
        #[arg(short, long, allow_negative_numbers = true)]
        a: Option<f64>,
        /// Leg opposite angle B
        #[arg(short, long, allow_negative_numbers = true)]
        b: Option<f64>,
        /// Hypotenuse
        #[arg(short, long, allow_negative_numbers = true)]
        c: Option<f64>,
        /// Angle A in degrees
        #[arg(long, allow_negative_numbers = true)]
        angle_a: Option<f64>,
        /// Angle B in degrees (ignored by the solver)
        #[arg(long, allow_negative_numbers = true)]
        angle_b: Option<f64>,
    },
    /// Scale a 30-60-90 or 45-45-90 triangle
    Special {
        /// 30-60-90 or 45-45-90
        name: String,
        /// Length of the shortest leg
        #[arg(default_value_t = 1.0)]
        short_leg: f64,
    },
    /// Descriptive statistics of a list of numbers
    Stats {
        /// Numbers separated by commas or spaces
        #[arg(required = true, allow_negative_numbers = true)]
        data: Vec<String>,
    },
    /// Solve ax² + bx + c = 0
    Quadratic {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// sin, cos and tan of an angle in degrees
    Trig {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
}

/// Exact counts travel as strings so JSON consumers keep every digit.
#[derive(Serialize)]
struct CountOutput {
    operation: String,
    value: String,
    exact: bool,
}

#[derive(Serialize)]
struct TriangleOutput {
    #[serde(flatten)]
    triangle: RightTriangle,
    area: f64,
    perimeter: f64,
}

impl Render for CountOutput {
    fn render(&self, _ctx: &DisplayContext) -> String {
        let marker = if self.exact { "=" } else { "≈" };
        format!("{} {} {}", self.operation, marker, self.value)
    }
}

impl Render for TriangleOutput {
    fn render(&self, ctx: &DisplayContext) -> String {
        self.triangle.render(ctx)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let ctx = DisplayContext::with_precision(cli.precision).json(cli.json);

    match cli.command {
        Commands::Factorial { n, approx } => {
            let output = if approx {
                let value = factorial_approx(n).context("computing factorial")?;
                CountOutput {
                    operation: format!("{}!", n),
                    value: format!("{:e}", value),
                    exact: false,
                }
            } else {
                let value = factorial(n).with_context(|| {
                    format!(
                        "computing {}! (exact results stop at {}!, try --approx)",
                        n, MAX_EXACT_FACTORIAL
                    )
                })?;
                count(format!("{}!", n), value)
            };
            emit(&ctx, &output)
        }
        Commands::Permutations { n, r } => {
            let value = permutations(n, r).context("counting permutations")?;
            emit(&ctx, &count(format!("P({}, {})", n, r), value))
        }
        Commands::Combinations { n, r } => {
            let value = combinations(n, r).context("counting combinations")?;
            emit(&ctx, &count(format!("C({}, {})", n, r), value))
        }
        Commands::Product {
            expression,
            start,
            end,
        } => {
            let result = evaluate_product_by_id(&expression, start, end)
                .with_context(|| format!("evaluating product '{}'", expression))?;
            emit(&ctx, &result)
        }
        Commands::Triangle {
            a,
            b,
            c,
            angle_a,
            angle_b,
        } => {
            let known = KnownValues {
                a,
                b,
                c,
                angle_a,
                angle_b,
            };
            info!(?known, "solving right triangle");
            let triangle = solve_right_triangle(&known).context("solving right triangle")?;
            emit_triangle(&ctx, triangle)
        }
        Commands::Special { name, short_leg } => {
            let special = SpecialTriangle::lookup(&name)?;
            let triangle = special
                .scale(short_leg)
                .with_context(|| format!("scaling the {} triangle", special.name))?;
            if !ctx.json {
                println!(
                    "{} triangle, sides in ratio {}",
                    special.name,
                    special.ratio_labels.join(" : ")
                );
            }
            emit_triangle(&ctx, triangle)
        }
        Commands::Stats { data } => {
            let values = parse_data(&data.join(" ")).context("reading data")?;
            let summary = describe(&values).context("summarizing data")?;
            emit(&ctx, &summary)
        }
        Commands::Quadratic { a, b, c } => {
            let quadratic = solve_quadratic(a, b, c).context("solving quadratic")?;
            emit(&ctx, &quadratic)
        }
        Commands::Trig { degrees } => {
            let values = evaluate_angle(degrees).context("evaluating angle")?;
            emit(&ctx, &values)
        }
    }
}

fn count(operation: String, value: u128) -> CountOutput {
    CountOutput {
        operation,
        value: value.to_string(),
        exact: true,
    }
}

fn emit<T: Serialize + Render>(ctx: &DisplayContext, value: &T) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", value.render(ctx));
    }
    Ok(())
}

fn emit_triangle(ctx: &DisplayContext, triangle: RightTriangle) -> Result<()> {
    let output = TriangleOutput {
        triangle,
        area: triangle.area(),
        perimeter: triangle.perimeter(),
    };
    emit(ctx, &output)
}
