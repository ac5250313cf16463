use crate::structs::Coordinate;

struct Building {
    aliases: &'static [&'static str],
    coordinate: Coordinate,
}

// Tested in declared order, first match wins. Aliases are lowercase because
// matching is case-insensitive substring containment, which tolerates room
// numbers and punctuation around the building name.
static BUILDINGS: &[Building] = &[
    Building {
        aliases: &["library"],
        coordinate: Coordinate(44.93855, -93.16822),
    },
    Building {
        aliases: &["humanities"],
        coordinate: Coordinate(44.93712, -93.16928),
    },
    Building {
        aliases: &["old main"],
        coordinate: Coordinate(44.93857, -93.16888),
    },
    Building {
        aliases: &["carnegie hall"],
        coordinate: Coordinate(44.93874, -93.16914),
    },
    Building {
        aliases: &["olin-rice science center"],
        coordinate: Coordinate(44.93676, -93.16896),
    },
    Building {
        aliases: &["markim hall"],
        coordinate: Coordinate(44.94033, -93.16777),
    },
    Building {
        aliases: &["kagin commons"],
        coordinate: Coordinate(44.94069, -93.16782),
    },
    Building {
        aliases: &[
            "ruth stricker dayton campus center",
            "john b davis lecture hall",
        ],
        coordinate: Coordinate(44.93946, -93.16783),
    },
    Building {
        aliases: &[
            "music building mairs concert hall",
            "janet wallace fine arts center",
            "law warschaw gallery",
        ],
        coordinate: Coordinate(44.93749, -93.16959),
    },
    Building {
        aliases: &["weyerhaeuser memorial chapel"],
        coordinate: Coordinate(44.93966, -93.16867),
    },
    Building {
        aliases: &["leonard center", "shaw field"],
        coordinate: Coordinate(44.93765, -93.16804),
    },
    Building {
        aliases: &["theater and dance building"],
        coordinate: Coordinate(44.93715, -93.17003),
    },
    Building {
        aliases: &["weyerhaeuser hall", "college admissions office"],
        coordinate: Coordinate(44.93945, -93.16916),
    },
    Building {
        aliases: &["great lawn"],
        coordinate: Coordinate(44.93725, -93.16855),
    },
    Building {
        aliases: &["macalester stadium"],
        coordinate: Coordinate(44.93523, 93.16734),
    },
];

/// Maps a free-form location string to the coordinate of a known campus
/// building. Off-campus and unrecognized locations resolve to `None`, which
/// is the common case rather than an error.
pub fn resolve_coordinate(location: &str) -> Option<Coordinate> {
    if location.is_empty() {
        return None;
    }

    let location = location.to_lowercase();

    BUILDINGS
        .iter()
        .find(|building| building.aliases.iter().any(|alias| location.contains(alias)))
        .map(|building| building.coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_room_suffix() {
        assert_eq!(
            resolve_coordinate("Library Room 201"),
            Some(Coordinate(44.93855, -93.16822))
        );
    }

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(
            resolve_coordinate("OLIN-RICE SCIENCE CENTER 150"),
            Some(Coordinate(44.93676, -93.16896))
        );
    }

    #[test]
    fn matches_any_alias_of_a_building() {
        let campus_center = resolve_coordinate("Ruth Stricker Dayton Campus Center");
        assert_eq!(campus_center, Some(Coordinate(44.93946, -93.16783)));
        assert_eq!(
            resolve_coordinate("John B Davis Lecture Hall"),
            campus_center
        );
    }

    #[test]
    fn first_declared_building_wins() {
        // Mentions two known buildings; Old Main is declared first.
        assert_eq!(
            resolve_coordinate("Between Old Main and Carnegie Hall"),
            Some(Coordinate(44.93857, -93.16888))
        );
    }

    #[test]
    fn weyerhaeuser_hall_is_not_the_chapel() {
        assert_eq!(
            resolve_coordinate("Weyerhaeuser Hall 26"),
            Some(Coordinate(44.93945, -93.16916))
        );
    }

    #[test]
    fn unknown_location_is_none() {
        assert_eq!(resolve_coordinate("Downtown Minneapolis"), None);
        assert_eq!(resolve_coordinate(""), None);
    }
}
