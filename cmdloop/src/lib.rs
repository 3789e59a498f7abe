//! Interactive command loop that reads lines and dispatches recognized
//! commands to registered handlers. Anything else goes to a default handler.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

/// What the loop does once a command has run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoopControl {
    /// Exit the loop.
    Break,
    /// Skip straight to the next prompt.
    Continue,
    /// Fall through to the default input handler.
    None,
}

type CommandAction = Box<dyn FnMut(&[String])>;
type DefaultHandler = Box<dyn FnMut(&str) -> Result<(), Box<dyn Error>>>;
type ErrorHandler = Box<dyn FnMut(&dyn Error)>;

struct Command {
    control: LoopControl,
    action: CommandAction,
}

pub struct CommandLoop {
    prefix: String,
    welcome: String,
    commands: BTreeMap<String, Command>,
    default_handler: Option<DefaultHandler>,
    error_handler: Option<ErrorHandler>,
    history_file: Option<PathBuf>,
    history: Vec<String>,
}

impl CommandLoop {
    pub fn builder() -> CommandLoopBuilder {
        CommandLoopBuilder::new()
    }

    /// Commands accepted so far this session, prefix included, in order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Process a single input line.
    ///
    /// A prefixed line is looked up in the command registry; the rest of the
    /// line is split on whitespace and passed to the action as params. An
    /// unrecognized command lists the valid ones and continues. Anything
    /// else goes to the default handler; a handler error is fed to the
    /// error handler, or returned if none was registered.
    pub fn dispatch(&mut self, input: &str) -> Result<LoopControl, Box<dyn Error>> {
        if let Some(rest) = input.strip_prefix(&self.prefix) {
            let mut words = rest.split_whitespace();
            let key = words.next().unwrap_or("");
            let params: Vec<String> = words.map(str::to_string).collect();
            let control = match self.commands.get_mut(key) {
                None => {
                    println!("  Command not recognized. valid commands are:");
                    self.print_commands("    ");
                    LoopControl::Continue
                }
                Some(cmd) => {
                    self.history.push(format!("{}{}", self.prefix, key));
                    (cmd.action)(&params);
                    cmd.control
                }
            };
            if control != LoopControl::None {
                return Ok(control);
            }
        }
        if let Some(handler) = self.default_handler.as_mut() {
            if let Err(e) = handler(input) {
                match self.error_handler.as_mut() {
                    Some(catch) => catch(e.as_ref()),
                    None => return Err(e),
                }
            }
        }
        Ok(LoopControl::None)
    }

    /// Print the welcome message, then prompt for input until a command
    /// breaks the loop or the line source runs dry.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        println!("{} Commands:", self.welcome);
        self.print_commands("  ");

        let mut rl = rustyline::Editor::<()>::new();
        if let Some(path) = self.history_file.clone() {
            if rl.load_history(&path).is_err() {
                println!("No history yet");
            }
        }
        while let Ok(line) = rl.readline("> ") {
            rl.add_history_entry(line.as_str());
            match self.dispatch(&line)? {
                LoopControl::Break => break,
                LoopControl::Continue | LoopControl::None => (),
            }
        }
        if let Some(path) = self.history_file.clone() {
            rl.save_history(&path)?;
        }
        Ok(())
    }

    fn print_commands(&self, indent: &str) {
        for name in self.commands.keys() {
            println!("{}{}{}", indent, self.prefix, name);
        }
    }
}

pub struct CommandLoopBuilder {
    prefix: String,
    welcome: Option<String>,
    commands: BTreeMap<String, Command>,
    default_handler: Option<DefaultHandler>,
    error_handler: Option<ErrorHandler>,
    history_file: Option<PathBuf>,
}

impl CommandLoopBuilder {
    fn new() -> Self {
        let mut commands = BTreeMap::new();
        // every loop knows how to exit
        commands.insert(
            "exit".to_string(),
            Command {
                control: LoopControl::Break,
                action: Box::new(|_| println!("  bye! \u{1f44b}")),
            },
        );
        CommandLoopBuilder {
            prefix: "/".to_string(),
            welcome: None,
            commands,
            default_handler: None,
            error_handler: None,
            history_file: None,
        }
    }

    pub fn welcome_message(mut self, welcome: &str) -> Self {
        self.welcome = Some(welcome.to_string());
        self
    }

    pub fn command_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn history_file(mut self, path: PathBuf) -> Self {
        self.history_file = Some(path);
        self
    }

    /// Register a command that keeps the loop going after it runs.
    pub fn command(self, name: &str, action: impl FnMut(&[String]) + 'static) -> Self {
        self.command_with_control(name, LoopControl::Continue, action)
    }

    pub fn command_with_control(
        mut self,
        name: &str,
        control: LoopControl,
        action: impl FnMut(&[String]) + 'static,
    ) -> Self {
        self.commands.insert(
            name.to_string(),
            Command {
                control,
                action: Box::new(action),
            },
        );
        self
    }

    /// Handler for input lines that are not commands.
    pub fn default_handler(
        mut self,
        handler: impl FnMut(&str) -> Result<(), Box<dyn Error>> + 'static,
    ) -> Self {
        self.default_handler = Some(Box::new(handler));
        self
    }

    /// Handler for errors raised by the default handler. Without one,
    /// errors bubble out of the loop.
    pub fn error_handler(mut self, handler: impl FnMut(&dyn Error) + 'static) -> Self {
        self.error_handler = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> CommandLoop {
        CommandLoop {
            prefix: self.prefix,
            welcome: self.welcome.unwrap_or_else(|| "Welcome.".to_string()),
            commands: self.commands,
            default_handler: self.default_handler,
            error_handler: self.error_handler,
            history_file: self.history_file,
            history: Vec::new(),
        }
    }
}
