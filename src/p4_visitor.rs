// Pattern 4: Visitor
// A portfolio holds three kinds of items. Operations over them live in
// visitors, so a new operation is a new visitor and the item types stay
// untouched. Items form a closed enum: adding a fourth kind forces every
// visitor to handle it.

use serde::Serialize;

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Items
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Letter {
    pub title: String,
    pub text: String,
}

/// `size` is in KB.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Picture {
    pub title: String,
    pub size: u64,
}

/// `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub title: String,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum PortfolioItem {
    Letter(Letter),
    Picture(Picture),
    Movie(Movie),
}

impl Letter {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

impl Picture {
    pub fn new(title: impl Into<String>, size: u64) -> Self {
        Self {
            title: title.into(),
            size,
        }
    }
}

impl Movie {
    pub fn new(title: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            duration,
        }
    }
}

impl From<Letter> for PortfolioItem {
    fn from(letter: Letter) -> Self {
        PortfolioItem::Letter(letter)
    }
}

impl From<Picture> for PortfolioItem {
    fn from(picture: Picture) -> Self {
        PortfolioItem::Picture(picture)
    }
}

impl From<Movie> for PortfolioItem {
    fn from(movie: Movie) -> Self {
        PortfolioItem::Movie(movie)
    }
}

// ============================================================================
// Visitor trait
// ============================================================================

pub trait PortfolioVisitor {
    fn visit(&mut self, item: &PortfolioItem) {
        match item {
            PortfolioItem::Letter(letter) => self.visit_letter(letter),
            PortfolioItem::Picture(picture) => self.visit_picture(picture),
            PortfolioItem::Movie(movie) => self.visit_movie(movie),
        }
    }

    fn visit_letter(&mut self, letter: &Letter);
    fn visit_picture(&mut self, picture: &Picture);
    fn visit_movie(&mut self, movie: &Movie);
}

// ============================================================================
// Visitors
// ============================================================================

/// Prints one summary line per item.
pub struct Reader<'a> {
    out: &'a mut Transcript,
}

impl<'a> Reader<'a> {
    pub fn new(out: &'a mut Transcript) -> Self {
        Self { out }
    }
}

impl PortfolioVisitor for Reader<'_> {
    fn visit_letter(&mut self, letter: &Letter) {
        // Characters, not bytes: the body may be Cyrillic.
        let length = letter.text.chars().count();
        self.out.line(format!(
            "Лист: {}, Розмір: {} символів",
            letter.title, length
        ));
    }

    fn visit_picture(&mut self, picture: &Picture) {
        self.out.line(format!(
            "Картина: {}, Розмір: {} KB",
            picture.title, picture.size
        ));
    }

    fn visit_movie(&mut self, movie: &Movie) {
        self.out.line(format!(
            "Фільм: {}, Тривалість: {} хвилин",
            movie.title, movie.duration
        ));
    }
}

/// Counts items per kind.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct KindCounter {
    pub letters: usize,
    pub pictures: usize,
    pub movies: usize,
}

impl PortfolioVisitor for KindCounter {
    fn visit_letter(&mut self, _letter: &Letter) {
        self.letters += 1;
    }

    fn visit_picture(&mut self, _picture: &Picture) {
        self.pictures += 1;
    }

    fn visit_movie(&mut self, _movie: &Movie) {
        self.movies += 1;
    }
}

// ============================================================================
// Portfolio
// ============================================================================

#[derive(Debug, Default, Serialize)]
pub struct Portfolio {
    elements: Vec<PortfolioItem>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, item: impl Into<PortfolioItem>) {
        self.elements.push(item.into());
    }

    pub fn elements(&self) -> &[PortfolioItem] {
        &self.elements
    }

    pub fn accept<V: PortfolioVisitor>(&self, visitor: &mut V) {
        for element in &self.elements {
            visitor.visit(element);
        }
    }

    pub fn read_elements(&self, out: &mut Transcript) {
        self.accept(&mut Reader::new(out));
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run(out: &mut Transcript) -> Result<()> {
    let mut portfolio = Portfolio::new();

    portfolio.add_element(Letter::new("My Letter", "Hello, this is a letter."));
    portfolio.add_element(Picture::new("My Picture", 2048));
    portfolio.add_element(Movie::new("My Movie", 120));

    out.dump(portfolio.elements())?;
    portfolio.read_elements(out);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn read(portfolio: &Portfolio) -> Vec<String> {
        let mut out = Transcript::new();
        portfolio.read_elements(&mut out);
        out.into_lines()
    }

    #[test]
    fn test_each_kind_has_own_summary() {
        let mut portfolio = Portfolio::new();
        portfolio.add_element(Letter::new("L", "abc"));
        portfolio.add_element(Picture::new("P", 512));
        portfolio.add_element(Movie::new("M", 90));

        assert_eq!(
            read(&portfolio),
            vec![
                "Лист: L, Розмір: 3 символів",
                "Картина: P, Розмір: 512 KB",
                "Фільм: M, Тривалість: 90 хвилин",
            ]
        );
    }

    #[test]
    fn test_order_follows_insertion() {
        let mut portfolio = Portfolio::new();
        portfolio.add_element(Movie::new("first", 1));
        portfolio.add_element(Letter::new("second", ""));
        portfolio.add_element(Movie::new("third", 3));

        let lines = read(&portfolio);
        assert!(lines[0].starts_with("Фільм: first"));
        assert_eq!(lines[1], "Лист: second, Розмір: 0 символів");
        assert!(lines[2].starts_with("Фільм: third"));
    }

    #[test]
    fn test_letter_counts_characters() {
        let mut portfolio = Portfolio::new();
        portfolio.add_element(Letter::new("Лист", "Привіт"));
        assert_eq!(read(&portfolio), vec!["Лист: Лист, Розмір: 6 символів"]);
    }

    #[test]
    fn test_kind_counter() {
        let mut portfolio = Portfolio::new();
        portfolio.add_element(Letter::new("a", "x"));
        portfolio.add_element(Letter::new("b", "y"));
        portfolio.add_element(Movie::new("c", 10));

        let mut counter = KindCounter::default();
        portfolio.accept(&mut counter);
        assert_eq!(
            counter,
            KindCounter {
                letters: 2,
                pictures: 0,
                movies: 1
            }
        );
    }

    #[test]
    fn test_dump_tags_kind() {
        let mut out = Transcript::new();
        out.dump(&PortfolioItem::from(Picture::new("P", 1))).unwrap();
        assert!(out.lines().iter().any(|l| l == "  \"kind\": \"Picture\","));
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        let lines = out.lines();
        assert_eq!(
            &lines[lines.len() - 3..],
            [
                "Лист: My Letter, Розмір: 24 символів",
                "Картина: My Picture, Розмір: 2048 KB",
                "Фільм: My Movie, Тривалість: 120 хвилин",
            ]
        );
    }
}
