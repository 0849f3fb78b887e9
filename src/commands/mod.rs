pub mod cd;
pub mod echo;
pub mod execute;
pub mod exit;
pub mod history;
pub mod pwd;
pub mod type_cmd;

/// The closed set of commands the shell implements itself. These never consult
/// the search path, even when an external program of the same name exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Type,
    Echo,
    Pwd,
    Cd,
    History,
}

static BUILTINS: [(&str, Builtin); 6] = [
    ("exit", Builtin::Exit),
    ("type", Builtin::Type),
    ("echo", Builtin::Echo),
    ("pwd", Builtin::Pwd),
    ("cd", Builtin::Cd),
    ("history", Builtin::History),
];

impl Builtin {
    pub fn from_name(name: &str) -> Option<Builtin> {
        BUILTINS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|&(_, builtin)| builtin)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTINS.iter().map(|&(name, _)| name)
    }
}

/// How the first token of a line gets handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Builtin(Builtin),
    External(&'a str),
}

impl<'a> Command<'a> {
    pub fn classify(name: &'a str) -> Self {
        match Builtin::from_name(name) {
            Some(builtin) => Command::Builtin(builtin),
            None => Command::External(name),
        }
    }
}
