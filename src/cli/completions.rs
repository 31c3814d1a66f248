use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    barista-configure completions bash > ~/.bash_completion.d/barista-configure\n\n\
                  Generate zsh completions:\n    barista-configure completions zsh > ~/.zfunc/_barista-configure\n\n\
                  Generate fish completions:\n    barista-configure completions fish > ~/.config/fish/completions/barista-configure.fish\n\n\
                  Generate PowerShell completions:\n    barista-configure completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
