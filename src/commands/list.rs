use ignsync::error::Result;

use super::CommandContext;

/// `list-python`: list modules discovered in the Python tree
pub struct ListPython;

impl ListPython {
    pub fn execute(ctx: &CommandContext, abs_path: bool) -> Result<()> {
        let roots = &ctx.resolved.roots;
        println!("Python modules in {}", roots.python_root.display());

        let result = ctx.scanner()?.scan_python(roots)?;
        CommandContext::report_warnings(&result.warnings);

        for module in &result.modules {
            if abs_path {
                println!("{}", module.python_path(roots).display());
            } else {
                println!("{}", module.rel_path().display());
            }
        }

        if ctx.verbose {
            println!("{} module(s)", result.modules.len());
        }
        Ok(())
    }
}

/// `list-ignition`: list modules discovered in the Ignition tree
pub struct ListIgnition;

impl ListIgnition {
    pub fn execute(ctx: &CommandContext, abs_path: bool) -> Result<()> {
        let roots = &ctx.resolved.roots;
        println!("Ignition modules in {}", roots.ignition_root.display());

        let result = ctx.scanner()?.scan_ignition(roots)?;
        CommandContext::report_warnings(&result.warnings);

        for module in &result.modules {
            if abs_path {
                println!("{}", module.code_path(roots).display());
            } else {
                println!("{}", module.rel_path().display());
            }
        }

        if ctx.verbose {
            println!("{} module(s)", result.modules.len());
        }
        Ok(())
    }
}
