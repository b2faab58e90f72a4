mod repl {
    use shunting_rpn::{validate_and_check_balance, Error, Limits};
    use shunting_rpn::{PostfixEvaluator, RPNExpr, ShuntingParser};

    macro_rules! debug {
        ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
    }

    fn run(input: &str, limits: Limits) -> Result<(RPNExpr, f64), Error> {
        validate_and_check_balance(input)?;
        let rpn = ShuntingParser::with_limits(limits).convert(input)?;
        for token in rpn.iter() {
            debug!("postfix token: {}", token);
        }
        let result = PostfixEvaluator::with_limits(limits).eval(&rpn)?;
        Ok((rpn, result))
    }

    pub fn evalexpr(input: &str, limits: Limits) {
        match run(input, limits) {
            Err(e) => println!("[Error] {}", e),
            Ok((rpn, result)) => {
                println!("Postfix expression: {}", rpn);
                println!("Result: {:.3}", result);
            }
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();
    let limits = shunting_rpn::Limits::from_env();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::evalexpr(&input, limits);
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let histpath = dirs::home_dir().map(|h| h.join(".tox_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline("Enter an infix expression: ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(input) => {
                let _ = rl.add_history_entry(input.as_str());
                repl::evalexpr(&input, limits);
            }
        }
    }
    if let Some(ref path) = histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
