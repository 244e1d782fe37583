use crate::library::{Genre, Library, Song, SongId};

/// Number of songs an expanded card previews.
pub const PREVIEW_LIMIT: usize = 10;

/// Static presentation data for one genre card.
#[derive(Debug, Clone, Copy)]
pub struct GenreCard {
    pub genre: Genre,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

impl GenreCard {
    pub const ALL: [GenreCard; 6] = [
        GenreCard {
            genre: Genre::Classical,
            icon: "𝄞",
            title: "Classical",
            description: "Timeless compositions from the greatest composers",
            image_url: "https://images.unsplash.com/photo-1520523839897-bd0b52f945a0?auto=format&fit=crop&w=800",
        },
        GenreCard {
            genre: Genre::Rock,
            icon: "⚡",
            title: "Rock",
            description: "From classic rock to modern alternatives",
            image_url: "https://images.unsplash.com/photo-1498038432885-c6f3f1b912ee?auto=format&fit=crop&w=800",
        },
        GenreCard {
            genre: Genre::HipHop,
            icon: "🎤",
            title: "Hip Hop",
            description: "Beats, rhymes and urban culture",
            image_url: "https://images.unsplash.com/photo-1571609860554-389b61eda71d?auto=format&fit=crop&w=800",
        },
        GenreCard {
            genre: Genre::Electronic,
            icon: "📻",
            title: "Electronic",
            description: "Digital sounds and electronic beats",
            image_url: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?auto=format&fit=crop&w=800",
        },
        GenreCard {
            genre: Genre::Jazz,
            icon: "🎷",
            title: "Jazz",
            description: "Smooth rhythms and improvised melodies",
            image_url: "https://images.unsplash.com/photo-1511192336575-5a79af67a629?auto=format&fit=crop&w=800",
        },
        GenreCard {
            genre: Genre::Pop,
            icon: "♫",
            title: "Pop",
            description: "Chart-topping hits and catchy tunes",
            image_url: "https://images.unsplash.com/photo-1501612780327-45045538702b?auto=format&fit=crop&w=800",
        },
    ];
}

/// First `PREVIEW_LIMIT` songs of `genre`, in library order.
pub fn preview(library: &Library, genre: Genre) -> Vec<&Song> {
    library.by_genre(genre).take(PREVIEW_LIMIT).collect()
}

/// What a row of an expanded card resolves to when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRow {
    /// The "View Songs" / "Hide Songs" toggle.
    Toggle,
    Song(SongId),
    /// The "View all N songs" escalation row.
    ViewAll,
}

/// Outcome of activating a catalog row; applied by the app, which owns
/// playback and the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAction {
    Play(SongId),
    ShowAll(Genre),
}

/// Rows of the card for `genre`, given whether it is expanded.
pub fn card_rows(library: &Library, genre: Genre, expanded: bool) -> Vec<CardRow> {
    let mut rows = vec![CardRow::Toggle];
    if !expanded {
        return rows;
    }
    rows.extend(preview(library, genre).into_iter().map(|s| CardRow::Song(s.id)));
    if library.genre_count(genre) > PREVIEW_LIMIT {
        rows.push(CardRow::ViewAll);
    }
    rows
}

/// Cursor and expansion state of the genre cards. Each card expands
/// independently; expanding never regenerates or reorders anything.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    expanded: [bool; 6],
    pub focused_card: usize,
    pub focused_row: usize,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, card: usize) -> bool {
        self.expanded.get(card).copied().unwrap_or(false)
    }

    pub fn focused_genre(&self) -> Genre {
        GenreCard::ALL[self.focused_card.min(GenreCard::ALL.len() - 1)].genre
    }

    /// Flip the expansion of `card`. Collapsing moves the cursor back to
    /// the toggle row if it was inside that card.
    pub fn toggle(&mut self, card: usize) {
        if let Some(e) = self.expanded.get_mut(card) {
            *e = !*e;
            if !*e && card == self.focused_card {
                self.focused_row = 0;
            }
        }
    }

    pub fn toggle_focused(&mut self) {
        self.toggle(self.focused_card);
    }

    pub fn next_card(&mut self) {
        if self.focused_card + 1 < GenreCard::ALL.len() {
            self.focused_card += 1;
            self.focused_row = 0;
        }
    }

    pub fn prev_card(&mut self) {
        if self.focused_card > 0 {
            self.focused_card -= 1;
            self.focused_row = 0;
        }
    }

    fn focused_rows(&self, library: &Library) -> Vec<CardRow> {
        card_rows(
            library,
            self.focused_genre(),
            self.is_expanded(self.focused_card),
        )
    }

    pub fn row_down(&mut self, library: &Library) {
        let len = self.focused_rows(library).len();
        if self.focused_row + 1 < len {
            self.focused_row += 1;
        }
    }

    pub fn row_up(&mut self) {
        self.focused_row = self.focused_row.saturating_sub(1);
    }

    pub fn row_top(&mut self) {
        self.focused_row = 0;
    }

    pub fn row_bottom(&mut self, library: &Library) {
        self.focused_row = self.focused_rows(library).len().saturating_sub(1);
    }

    /// The row under the cursor.
    pub fn focused(&self, library: &Library) -> CardRow {
        self.focused_rows(library)
            .get(self.focused_row)
            .copied()
            .unwrap_or(CardRow::Toggle)
    }

    /// Activate the row under the cursor. Toggling is handled locally;
    /// playing and escalating to the full library are handed back.
    pub fn activate(&mut self, library: &Library) -> Option<CatalogAction> {
        match self.focused(library) {
            CardRow::Toggle => {
                self.toggle_focused();
                None
            }
            CardRow::Song(id) => Some(CatalogAction::Play(id)),
            CardRow::ViewAll => Some(CatalogAction::ShowAll(self.focused_genre())),
        }
    }
}
