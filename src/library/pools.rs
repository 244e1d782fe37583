//! Fixed per-genre title and artist pools.

use super::model::Genre;

pub(super) fn titles(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::Rock => &[
            "Electric Dreams",
            "Midnight Rider",
            "Thunder Road",
            "Wild Heart",
            "Neon Lights",
            "Desert Storm",
            "City Lights",
            "Breaking Free",
            "Lost Highway",
            "Rising Sun",
        ],
        Genre::Pop => &[
            "Dancing Queen",
            "Summer Love",
            "Heartbeat",
            "Starlight",
            "Ocean Eyes",
            "Golden Hour",
            "Midnight Sky",
            "Sweet Dreams",
            "Paradise",
            "Wonderland",
        ],
        Genre::HipHop => &[
            "Street Life",
            "Urban Flow",
            "City Beats",
            "Rhythm & Poetry",
            "Concrete Jungle",
            "Downtown",
            "Night Life",
            "Street Dreams",
            "City Lights",
            "Urban Legend",
        ],
        Genre::Jazz => &[
            "Blue Moon",
            "Midnight Jazz",
            "Smooth Sailing",
            "Night & Day",
            "Sweet Melody",
            "Autumn Leaves",
            "Moonlight",
            "Star Dust",
            "Blue Sky",
            "Night Train",
        ],
        Genre::Classical => &[
            "Moonlight",
            "Spring Symphony",
            "Winter Dreams",
            "Summer Night",
            "Autumn Wind",
            "Morning Light",
            "Evening Song",
            "Night Music",
            "Dawn Chorus",
            "Twilight",
        ],
        Genre::Electronic => &[
            "Digital Dreams",
            "Electric Sky",
            "Neon Nights",
            "Cyber Space",
            "Future World",
            "Tech Life",
            "Digital Age",
            "Virtual Reality",
            "Electric City",
            "Cyber Dreams",
        ],
    }
}

pub(super) fn artists(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::Rock => &[
            "The Stone Raiders",
            "Electric Thunder",
            "Midnight Riders",
            "Desert Storm",
            "The Night Owls",
            "Solar Eclipse",
            "Thunder Gods",
            "Lightning Strike",
            "Mountain Kings",
            "Ocean Drive",
        ],
        Genre::Pop => &[
            "Starlight Sisters",
            "Dream Makers",
            "The Harmony",
            "Sweet Symphony",
            "Crystal Clear",
            "Golden Voice",
            "Silver Sound",
            "Diamond Dreams",
            "Pearl Junction",
            "Ruby Nights",
        ],
        Genre::HipHop => &[
            "Urban Poets",
            "Street Kings",
            "City Slickers",
            "Beat Masters",
            "Rhythm Nation",
            "Flow Masters",
            "Word Smith",
            "Beat Boxers",
            "Rhyme Masters",
            "Flow Dynasty",
        ],
        Genre::Jazz => &[
            "Blue Note Quartet",
            "Smooth Operators",
            "Night Birds",
            "Jazz Messengers",
            "Cool Cats",
            "Swing Kings",
            "Blues Brothers",
            "Jazz Masters",
            "Night Owls",
            "Blue Moon",
        ],
        Genre::Classical => &[
            "Vienna Philharmonic",
            "London Symphony",
            "Royal Orchestra",
            "Berlin Philharmonic",
            "New York Philharmonic",
            "Paris Orchestra",
            "Moscow Symphony",
            "Tokyo Philharmonic",
            "Amsterdam Concertgebouw",
            "Cleveland Orchestra",
        ],
        Genre::Electronic => &[
            "Digital Masters",
            "Electric Dreams",
            "Cyber Punks",
            "Tech Lords",
            "Virtual Reality",
            "Digital Age",
            "Electric Sky",
            "Neon Knights",
            "Future World",
            "Cyber Space",
        ],
    }
}
