use super::CliFlags;
use crate::error::{Error, Result};
use crate::settings::{Kind, OutputRequest};

pub fn parse(args: &[String]) -> Result<CliFlags> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "--verbose" => flags.verbose = true,
            "-b" | "--board" => flags.clipboard = true,
            flag @ ("-x" | "--hex" | "-p" | "--password") => {
                let kind = if flag == "-x" || flag == "--hex" {
                    Kind::Hex
                } else {
                    Kind::Password
                };
                i += 1;
                let raw = args
                    .get(i)
                    .ok_or_else(|| Error::MissingValue(flag.to_string()))?;
                flags.requests.push(OutputRequest::parse(kind, raw)?);
            }
            arg => return Err(Error::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("jytter")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments_uses_fixed_tables() {
        let flags = parse(&args(&[])).unwrap();
        assert!(!flags.has_custom_requests());
        assert!(!flags.quiet && !flags.clipboard && !flags.help);
    }

    #[test]
    fn requests_keep_order() {
        let flags = parse(&args(&["-p", "16", "--hex", "3", "--password", "0"])).unwrap();
        let got: Vec<_> = flags.requests.iter().map(|r| (r.kind, r.count)).collect();
        assert_eq!(
            got,
            [(Kind::Password, 16), (Kind::Hex, 3), (Kind::Password, 0)]
        );
    }

    #[test]
    fn switches() {
        let flags = parse(&args(&["-q", "-b", "--verbose", "-v", "-h"])).unwrap();
        assert!(flags.quiet && flags.clipboard && flags.verbose && flags.version && flags.help);
    }

    #[test]
    fn errors() {
        assert!(matches!(parse(&args(&["--hex"])), Err(Error::MissingValue(_))));
        assert!(matches!(parse(&args(&["-p", "-3"])), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse(&args(&["-x", "70000"])), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse(&args(&["--bytes"])), Err(Error::UnknownArg(_))));
    }
}
