use std::path::PathBuf;
use structopt::StructOpt;
use structopt::clap::AppSettings;
use yansi::Paint;

use jalali::partial_date::PartialDate;
use jalali::{CalendarView, GregorianDate, JalaliDate, Navigation};
use jalali_tools::CalendarConfig;

#[derive(StructOpt)]
#[structopt(setting = AppSettings::ColoredHelp)]
#[structopt(setting = AppSettings::UnifiedHelpMessage)]
#[structopt(setting = AppSettings::DeriveDisplayOrder)]
#[structopt(setting = AppSettings::SubcommandRequiredElseHelp)]
struct Options {
	/// Increase the log level.
	#[structopt(long, short)]
	#[structopt(parse(from_occurrences))]
	#[structopt(global = true)]
	verbose: i8,

	/// Decrease the log level.
	#[structopt(long, short)]
	#[structopt(parse(from_occurrences))]
	#[structopt(global = true)]
	quiet: i8,

	/// Read configuration from this file instead of searching for jalali.toml.
	#[structopt(long)]
	#[structopt(value_name = "FILE")]
	#[structopt(global = true)]
	config: Option<PathBuf>,

	/// Disable colored output.
	#[structopt(long)]
	#[structopt(global = true)]
	no_color: bool,

	#[structopt(subcommand)]
	command: Command,
}

#[derive(StructOpt)]
enum Command {
	/// Show the date of today in the Jalali calendar.
	Today(TodayOptions),

	/// Convert a Gregorian date to the Jalali calendar.
	ToJalali(ToJalaliOptions),

	/// Convert a Jalali date to the Gregorian calendar.
	ToGregorian(ToGregorianOptions),

	/// Show the days of a Jalali month.
	Month(MonthOptions),

	/// List the Jalali leap years in a range of years.
	LeapYears(LeapYearsOptions),
}

#[derive(StructOpt)]
struct TodayOptions {
	/// Use this Gregorian date instead of the system clock.
	#[structopt(long)]
	#[structopt(value_name = "YYYY-MM-DD")]
	date: Option<GregorianDate>,
}

#[derive(StructOpt)]
struct ToJalaliOptions {
	/// The Gregorian date to convert.
	#[structopt(value_name = "YYYY-MM-DD")]
	date: GregorianDate,
}

#[derive(StructOpt)]
struct ToGregorianOptions {
	/// The Jalali date to convert.
	#[structopt(value_name = "YYYY-MM-DD")]
	date: JalaliDate,
}

#[derive(StructOpt)]
struct MonthOptions {
	/// The month to show, or a date to select. Defaults to the current month.
	#[structopt(value_name = "YEAR[-MONTH[-DAY]]")]
	period: Option<PartialDate>,

	/// Move this many months back from the chosen month.
	#[structopt(long, short)]
	#[structopt(parse(from_occurrences))]
	previous: u32,

	/// Move this many months forward from the chosen month.
	#[structopt(long, short)]
	#[structopt(parse(from_occurrences))]
	next: u32,

	/// Use this Gregorian date as today instead of the system clock.
	#[structopt(long)]
	#[structopt(value_name = "YYYY-MM-DD")]
	today: Option<GregorianDate>,

	/// Print the month without colors, marking today with * and the selected day with <.
	#[structopt(long)]
	plain: bool,
}

#[derive(StructOpt)]
struct LeapYearsOptions {
	/// The first Jalali year to consider.
	#[structopt(long)]
	from: i32,

	/// The last Jalali year to consider.
	#[structopt(long)]
	to: i32,
}

fn main() {
	let options = Options::from_args();
	init_logging(options.verbose.saturating_sub(options.quiet));

	if do_main(options).is_err() {
		std::process::exit(1);
	}
}

fn init_logging(verbosity: i8) {
	let level = if verbosity <= -2 {
		log::LevelFilter::Error
	} else if verbosity == -1 {
		log::LevelFilter::Warn
	} else if verbosity == 0 {
		log::LevelFilter::Info
	} else if verbosity == 1 {
		log::LevelFilter::Debug
	} else {
		log::LevelFilter::Trace
	};

	let main_module = env!("CARGO_PKG_NAME").replace("-", "_");
	env_logger::Builder::from_default_env()
		.filter_module(module_path!(), level)
		.filter_module(&main_module, level)
		.init();
}

fn do_main(options: Options) -> Result<(), ()> {
	let config = load_config(options.config.as_ref())?;
	if options.no_color || !config.display.color {
		Paint::disable();
	}

	match options.command {
		Command::Today(x) => show_today(x, &config),
		Command::ToJalali(x) => to_jalali(x, &config),
		Command::ToGregorian(x) => to_gregorian(x),
		Command::Month(x) => show_month(x, &config),
		Command::LeapYears(x) => list_leap_years(x, &config),
	}
}

fn load_config(path: Option<&PathBuf>) -> Result<CalendarConfig, ()> {
	let path = match path {
		Some(path) => path.clone(),
		None => {
			let current_dir = std::env::current_dir()
				.map_err(|e| log::error!("failed to determine working directory: {}", e))?;
			match CalendarConfig::find("/", &current_dir) {
				Some(path) => path,
				None => {
					log::debug!("no {} found, using default configuration", jalali_tools::CONFIG_FILE_NAME);
					return Ok(CalendarConfig::default());
				},
			}
		},
	};

	log::debug!("reading configuration from {}", path.display());
	CalendarConfig::read_file(&path)
		.map_err(|e| log::error!("{}", e))
}

fn today(date: Option<GregorianDate>) -> GregorianDate {
	date.unwrap_or_else(GregorianDate::today)
}

fn show_today(options: TodayOptions, config: &CalendarConfig) -> Result<(), ()> {
	let gregorian = today(options.date);
	let date = JalaliDate::from(gregorian);
	log::debug!("today is {} in the Gregorian calendar", gregorian);

	let formatted = config.format_date(date)
		.map_err(|e| log::error!("{}", e))?;
	println!("{}", Paint::cyan(formatted));
	Ok(())
}

fn to_jalali(options: ToJalaliOptions, config: &CalendarConfig) -> Result<(), ()> {
	let date = JalaliDate::from(options.date);
	let formatted = config.format_date(date)
		.map_err(|e| log::error!("{}", e))?;
	println!("{} ({})", date, Paint::cyan(formatted));
	Ok(())
}

fn to_gregorian(options: ToGregorianOptions) -> Result<(), ()> {
	let date = options.date.to_gregorian();
	println!("{}", date);
	Ok(())
}

fn show_month(options: MonthOptions, config: &CalendarConfig) -> Result<(), ()> {
	let mut view = CalendarView::new(JalaliDate::from(today(options.today)));

	match options.period {
		Some(PartialDate::YearMonthDay(date)) => view = view.select(date),
		Some(period) => view = view.go_to(period.year_month()),
		None => (),
	}
	for _ in 0..options.previous {
		view = view.navigate(Navigation::Previous);
	}
	for _ in 0..options.next {
		view = view.navigate(Navigation::Next);
	}
	log::debug!("showing month {} with {} selected", view.displayed(), view.selected());

	let grid = view.grid();
	if options.plain {
		let stdout = std::io::stdout();
		jalali_tools::grid::write_plain(&mut stdout.lock(), &grid, config)
			.map_err(|e| log::error!("failed to write to standard output: {}", e))?;
	} else {
		jalali_tools::grid::print_colored(&grid, config);
	}

	println!();
	let selected = config.format_date(view.selected())
		.map_err(|e| log::error!("{}", e))?;
	println!("{}", Paint::default(selected).bold());
	Ok(())
}

fn list_leap_years(options: LeapYearsOptions, config: &CalendarConfig) -> Result<(), ()> {
	if options.from > options.to {
		log::error!("invalid range: {} is after {}", options.from, options.to);
		return Err(());
	}
	for &year in &[options.from, options.to] {
		if !(jalali::MIN_YEAR..=jalali::MAX_YEAR).contains(&year) {
			log::error!("{}", jalali::InvalidDate::Year { year });
			return Err(());
		}
	}

	let leap_years: Vec<_> = (options.from..=options.to)
		.filter(|&year| jalali::is_jalali_leap_year(year))
		.collect();
	log::debug!("found {} leap years from {} to {}", leap_years.len(), options.from, options.to);

	for year in leap_years {
		let last_day = JalaliDate::new(year, 12, 30)
			.map_err(|e| log::error!("{}", e))?;
		println!("{} ({})", config.number(year), last_day.to_gregorian());
	}
	Ok(())
}
