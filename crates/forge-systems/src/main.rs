use chrono::{Duration, Utc};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use forge_catalog::character::{character_prototypes, ClassTag};
use forge_catalog::coffee::{with_extra, Beverage, ExtraTag, SimpleCoffee};
use forge_catalog::furniture::{furniture_families, StyleTag};
use forge_catalog::meal::{meal_builders, MealDirector, MealTag};
use forge_catalog::route::{route_strategies, RouteTag};
use forge_catalog::shipping::{shipping_methods, ShippingTag};
use forge_core::Creator;
use forge_systems::expense::{EqualSplit, Expense, ExpenseBook, GroupDirectory, UserDirectory};
use forge_systems::parking::{Floor, ParkingLot, Spot, Vehicle, VehicleKind};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("forge")
        .version("0.1.0")
        .about("Creation-pattern demonstrations: factories, builders, prototypes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("ship")
                .about("Book a shipment through the shipping factory")
                .arg(
                    Arg::new("method")
                        .long("method")
                        .help("Shipping method (air/sea/ground or 1/2/3); prompted on stdin when omitted"),
                )
                .arg(
                    Arg::new("weight")
                        .long("weight")
                        .default_value("10")
                        .value_parser(value_parser!(f64))
                        .help("Weight in kg"),
                )
                .arg(
                    Arg::new("distance")
                        .long("distance")
                        .default_value("500")
                        .value_parser(value_parser!(f64))
                        .help("Distance in km"),
                ),
        )
        .subcommand(
            Command::new("furnish")
                .about("Create a consistent furniture set from one family")
                .arg(
                    Arg::new("style")
                        .long("style")
                        .required(true)
                        .help("Furniture style (victorian/modern or 1/2)"),
                ),
        )
        .subcommand(
            Command::new("meal")
                .about("Run a meal builder through the director's step order")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .required(true)
                        .help("Meal kind (vegetarian/non-vegetarian or 1/2)"),
                ),
        )
        .subcommand(
            Command::new("character")
                .about("Clone a character from the prototype registry")
                .arg(
                    Arg::new("class")
                        .long("class")
                        .required(true)
                        .help("Character class (warrior/mage/archer)"),
                )
                .arg(
                    Arg::new("rename")
                        .long("rename")
                        .help("Rename the clone after creation"),
                ),
        )
        .subcommand(
            Command::new("brew")
                .about("Price a coffee with layered add-ons")
                .arg(
                    Arg::new("extra")
                        .long("extra")
                        .action(ArgAction::Append)
                        .help("Add-on (milk/sugar/whipped-cream); repeatable"),
                ),
        )
        .subcommand(
            Command::new("route")
                .about("Plan a route with a selectable strategy")
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .required(true)
                        .help("Travel mode (driving/walking/cycling)"),
                )
                .arg(Arg::new("from").long("from").default_value("Home"))
                .arg(Arg::new("to").long("to").default_value("Office")),
        )
        .subcommand(
            Command::new("park")
                .about("Park and unpark a vehicle in the demo lot")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .default_value("car")
                        .help("Vehicle kind (car/bike/truck)"),
                )
                .arg(Arg::new("plate").long("plate").default_value("DL-001"))
                .arg(
                    Arg::new("minutes")
                        .long("minutes")
                        .default_value("30")
                        .value_parser(value_parser!(i64))
                        .help("Minutes the vehicle stays parked"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output ticket and receipt as JSON"),
                ),
        )
        .subcommand(
            Command::new("split")
                .about("Split an expense equally across the demo group")
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .default_value("300")
                        .value_parser(value_parser!(f64))
                        .help("Total amount paid"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the settlement report as JSON"),
                ),
        );

    let matches = cli.get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("ship", args)) => {
            let selector = match args.get_one::<String>("method") {
                Some(method) => method.clone(),
                None => prompt("Enter shipping method (1 for Air, 2 for Sea, 3 for Ground): ")?,
            };
            let tag: ShippingTag = selector.parse()?;
            let weight = *args.get_one::<f64>("weight").unwrap();
            let distance = *args.get_one::<f64>("distance").unwrap();

            let method = shipping_methods().create(&tag)?;
            println!("{}", method.book());
            println!("Shipping cost: ${}", method.cost(weight, distance));
        }
        Some(("furnish", args)) => {
            let tag: StyleTag = args.get_one::<String>("style").unwrap().parse()?;

            let factory = furniture_families().create(&tag)?;
            let set = factory.create_set();
            println!("{}", set.chair.sit_on());
            println!("{}", set.sofa.lie_on());
        }
        Some(("meal", args)) => {
            let tag: MealTag = args.get_one::<String>("kind").unwrap().parse()?;

            let mut builder = meal_builders().create(&tag)?;
            let meal = MealDirector.construct(builder.as_mut())?;
            println!("{}", meal.summary());
        }
        Some(("character", args)) => {
            let tag: ClassTag = args.get_one::<String>("class").unwrap().parse()?;

            let registry = character_prototypes();
            let mut hero = registry.clone_of(&tag)?;
            if let Some(name) = args.get_one::<String>("rename") {
                hero.rename(name);
            }
            println!("{}", hero.details());
        }
        Some(("brew", args)) => {
            let mut drink: Box<dyn Beverage> = Box::new(SimpleCoffee);
            if let Some(extras) = args.get_many::<String>("extra") {
                for raw in extras {
                    let extra: ExtraTag = raw.parse()?;
                    drink = with_extra(drink, extra);
                }
            }
            println!("{} costs ${}", drink.description(), drink.cost());
        }
        Some(("route", args)) => {
            let tag: RouteTag = args.get_one::<String>("mode").unwrap().parse()?;
            let from = args.get_one::<String>("from").unwrap();
            let to = args.get_one::<String>("to").unwrap();

            let strategy = route_strategies().create(&tag)?;
            println!("{}", strategy.plan(from, to));
        }
        Some(("park", args)) => {
            let kind: VehicleKind = args.get_one::<String>("kind").unwrap().parse()?;
            let plate = args.get_one::<String>("plate").unwrap();
            let minutes = *args.get_one::<i64>("minutes").unwrap();
            let json = args.get_flag("json");

            let mut lot = ParkingLot::new("CyberPark");
            let mut floor = Floor::new(1);
            floor.add_spot(Spot::new(101, VehicleKind::Car));
            floor.add_spot(Spot::new(102, VehicleKind::Bike));
            floor.add_spot(Spot::new(103, VehicleKind::Truck));
            lot.add_floor(floor);

            let exited_at = Utc::now();
            let entered_at = exited_at - Duration::minutes(minutes);
            let ticket = lot.park(Vehicle::new(kind, plate.clone()), entered_at)?;
            let receipt = lot.unpark(&ticket, exited_at)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&ticket)?);
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            } else {
                println!(
                    "Vehicle {} parked at floor {} spot {}.",
                    ticket.plate, ticket.floor, ticket.spot
                );
                println!("Vehicle {} left. Pay: ${}", receipt.plate, receipt.fee);
            }
        }
        Some(("split", args)) => {
            let amount = *args.get_one::<f64>("amount").unwrap();
            let json = args.get_flag("json");

            let mut users = UserDirectory::new();
            users.add_user(1, "Alice", "alice@example.com");
            users.add_user(2, "Bob", "bob@example.com");
            users.add_user(3, "Charlie", "charlie@example.com");

            let mut groups = GroupDirectory::new();
            groups.create_group(101, "Trip to Goa");
            for id in [1, 2, 3] {
                groups.add_member(101, id, &users)?;
            }

            let mut book = ExpenseBook::new();
            let expense = Expense::new(1001, amount, 1, vec![1, 2, 3], Box::new(EqualSplit))?;
            let report = book.add_expense(expense, &users)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let group = groups.get(101)?;
                println!("Group: {} [ID: {}] Members:", group.name, group.id);
                for line in groups.roster(101, &users)? {
                    println!("{line}");
                }
                println!(
                    "Expense {} of amount {} paid by {}",
                    report.expense_id, report.amount, report.paid_by
                );
                for share in &report.owes {
                    println!("{} owes: {}", share.name, share.amount);
                }
            }
        }
        _ => unreachable!("subcommand required"),
    }
    Ok(())
}

fn prompt(message: &str) -> anyhow::Result<String> {
    use std::io::Write;

    print!("{message}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
