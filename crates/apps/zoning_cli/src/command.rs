use foundation::{LatLng, ParcelId};
use parcels::ZoningType;
use session::Event;

/// One line of terminal input.
#[derive(Debug)]
pub enum Command {
    /// Forwarded to the session as-is.
    Dispatch(Event),
    /// Read-only queries answered from the current session state.
    Query(Query),
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Query {
    List,
    Info,
    Help,
}

pub fn usage() -> String {
    "commands:
  select <id>            toggle a parcel by id
  click <lat> <lng>      click the map at a position
  hover <lat> <lng>      move the pointer over the map
  leave                  move the pointer off the map
  zoning <type>          choose the new zoning (Residential, Commercial, Industrial, Planned)
  clear                  clear the selection
  submit                 apply the chosen zoning to the selection
  reload                 reload parcels from the backend
  automove               toggle following the selection
  dark                   toggle dark mode
  zoom <levels>          zoom in (positive) or out (negative)
  list                   list parcels
  info                   show the information panel
  help                   show this help
  quit                   exit"
        .to_string()
}

/// Parses a command line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match cmd.to_ascii_lowercase().as_str() {
        "select" | "toggle" => {
            let [id] = exact::<1>(cmd, &args)?;
            let id: ParcelId = id.parse().map_err(|e| format!("invalid parcel id {id:?}: {e}"))?;
            Command::Dispatch(Event::ParcelClicked(id))
        }
        "click" => Command::Dispatch(Event::MapClicked(position(cmd, &args)?)),
        "hover" => Command::Dispatch(Event::PointerMoved(position(cmd, &args)?)),
        "leave" => Command::Dispatch(Event::PointerLeft),
        "zoning" => {
            if args.is_empty() {
                return Err("zoning requires a type".to_string());
            }
            Command::Dispatch(Event::ZoningChosen(zoning(&args.join(" "))))
        }
        "clear" => Command::Dispatch(Event::ClearRequested),
        "submit" => Command::Dispatch(Event::SubmitRequested),
        "reload" => Command::Dispatch(Event::ReloadRequested),
        "automove" => Command::Dispatch(Event::AutoMoveToggled),
        "dark" => Command::Dispatch(Event::DarkModeToggled),
        "zoom" => {
            let [delta] = exact::<1>(cmd, &args)?;
            let delta: f64 = number(delta)?;
            Command::Dispatch(Event::Zoomed(delta))
        }
        "list" => Command::Query(Query::List),
        "info" => Command::Query(Query::Info),
        "help" | "?" => Command::Query(Query::Help),
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other}\n\n{}", usage())),
    };
    Ok(Some(command))
}

/// Matches the named classes case-insensitively; anything else is kept verbatim.
fn zoning(raw: &str) -> ZoningType {
    ZoningType::CHOICES
        .into_iter()
        .find(|z| z.as_str().eq_ignore_ascii_case(raw))
        .unwrap_or_else(|| ZoningType::Other(raw.to_string()))
}

fn position(cmd: &str, args: &[&str]) -> Result<LatLng, String> {
    let [lat, lng] = exact::<2>(cmd, args)?;
    Ok(LatLng::new(number(lat)?, number(lng)?))
}

fn number(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("invalid number {s:?}: {e}"))?;
    if !v.is_finite() {
        return Err(format!("invalid number {s:?}"));
    }
    Ok(v)
}

fn exact<'a, const N: usize>(cmd: &str, args: &[&'a str]) -> Result<[&'a str; N], String> {
    <[&'a str; N]>::try_from(args)
        .map_err(|_| format!("{cmd} takes {N} argument(s), got {}", args.len()))
}
