mod command;
mod issue_snapshot;
