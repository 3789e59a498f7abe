use cmdloop::{CommandLoop, LoopControl};
use rpn::ShuntingParser;

// evaluate a one-shot expression passed on the command line
fn evalexpr(input: &str) {
    match ShuntingParser::parse_str(input) {
        Err(e) => println!("Parse error: {}", e),
        Ok(expr) => match expr.evaluate() {
            Err(e) => println!("Eval error: {}", e),
            Ok(result) => println!("{} = {}", expr, result),
        },
    };
}

fn fmt_list<T: ToString>(items: &[T]) -> String {
    let items: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let launch_args: Vec<String> = std::env::args().skip(1).collect();
    if !launch_args.is_empty() {
        evalexpr(&launch_args.join(" "));
        return Ok(());
    }

    let mut builder = CommandLoop::builder()
        .welcome_message("Hi! Enter a mathematical expression to be evaluated, or enter a command.")
        .command_prefix("/")
        .command("time", |_| {
            println!("  the time is {}", chrono::Local::now().format("%H:%M"))
        })
        .command_with_control("die", LoopControl::Break, |_| println!("I'm dead"))
        .command("args", move |_| {
            for (i, arg) in launch_args.iter().enumerate() {
                println!("arg[{}]={}", i, arg);
            }
        })
        .command("printParams", |params| {
            println!("you included params: {}", fmt_list(params))
        })
        .default_handler(|input| {
            let expr = ShuntingParser::parse_str(input)?;
            println!("  numbers:   {}", fmt_list(expr.numbers()));
            println!("  operators: {}", fmt_list(expr.operators()));
            println!("  solution:  {}", expr.evaluate()?);
            Ok(())
        })
        .error_handler(|_| println!("  invalid expression, please try again."));

    if let Some(home) = dirs::home_dir() {
        builder = builder.history_file(home.join(".calc_history"));
    }
    builder.build().run()
}
