//! Simple command that prints one or '-n count' UUID strings of a chosen version

use std::{env, io, io::Write, process::ExitCode};

use rfc4122::{Domain, Uuid};

const USAGE: &str = "[-v 1|2|3|4|5|comb] [-n count] [-d person|group] [-s namespace] [-N name]";

#[derive(Debug)]
enum Version {
    V1,
    V2,
    V3,
    V4,
    V5,
    Comb,
}

#[derive(Debug)]
struct Options {
    version: Version,
    count: usize,
    domain: Domain,
    namespace: Uuid,
    name: String,
}

fn main() -> io::Result<ExitCode> {
    env_logger::init();

    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!("Usage: {} {}", program.as_deref().unwrap_or("uuidgen"), USAGE);
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count {
        let result = match opts.version {
            Version::V1 => rfc4122::uuid1(),
            Version::V2 => rfc4122::uuid2(opts.domain),
            Version::V3 => Ok(rfc4122::uuid3(&opts.namespace, &opts.name)),
            Version::V4 => rfc4122::uuid4(),
            Version::V5 => Ok(rfc4122::uuid5(&opts.namespace, &opts.name)),
            Version::Comb => rfc4122::comb4().map(Uuid::from),
        };
        match result {
            Ok(uuid) => writeln!(buf, "{}", uuid)?,
            Err(err) => {
                buf.flush()?;
                eprintln!("Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut version = None;
    let mut count = None;
    let mut domain = None;
    let mut namespace = None;
    let mut name = None;
    while let Some(arg) = args.next() {
        let opt = match arg.as_str() {
            "-v" | "-n" | "-d" | "-s" | "-N" => &arg[1..],
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        };
        let Some(value) = args.next() else {
            return Err(format!("argument to option '{}' missing", opt));
        };
        let given_twice = match opt {
            "v" => version.replace(parse_version(&value)?).is_some(),
            "n" => {
                let Ok(c) = value.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", value));
                };
                count.replace(c).is_some()
            }
            "d" => {
                let Ok(d) = value.parse() else {
                    return Err(format!("invalid argument to option 'd': '{}'", value));
                };
                domain.replace(d).is_some()
            }
            "s" => namespace.replace(parse_namespace(&value)?).is_some(),
            _ => name.replace(value).is_some(),
        };
        if given_twice {
            return Err(format!("option '{}' given more than once", opt));
        }
    }

    let version = version.unwrap_or(Version::V4);
    if matches!(version, Version::V3 | Version::V5) && name.is_none() {
        return Err("versions 3 and 5 require option 'N'".to_owned());
    }
    Ok(Options {
        version,
        count: count.unwrap_or(1),
        domain: domain.unwrap_or(Domain::Person),
        namespace: namespace.unwrap_or(rfc4122::NAMESPACE_DNS),
        name: name.unwrap_or_default(),
    })
}

fn parse_version(value: &str) -> Result<Version, String> {
    match value {
        "1" => Ok(Version::V1),
        "2" => Ok(Version::V2),
        "3" => Ok(Version::V3),
        "4" => Ok(Version::V4),
        "5" => Ok(Version::V5),
        "comb" => Ok(Version::Comb),
        _ => Err(format!("invalid argument to option 'v': '{}'", value)),
    }
}

fn parse_namespace(value: &str) -> Result<Uuid, String> {
    match value {
        "dns" => Ok(rfc4122::NAMESPACE_DNS),
        "url" => Ok(rfc4122::NAMESPACE_URL),
        "oid" => Ok(rfc4122::NAMESPACE_OID),
        "x500" => Ok(rfc4122::NAMESPACE_X500),
        _ => value
            .parse()
            .map_err(|err| format!("invalid argument to option 's': {}", err)),
    }
}
