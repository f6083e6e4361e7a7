//! Compiled-in list of Met highlight titles resolved by the binary.

use crate::resolver::Query;

const HIGHLIGHTS: &[(&str, Option<&str>)] = &[
    // Iconic masterpieces
    ("The Temple of Dendur", None),
    ("Washington Crossing the Delaware", Some("Emanuel Leutze")),
    ("Madame X (Madame Pierre Gautreau)", Some("John Singer Sargent")),
    ("Aristotle with a Bust of Homer", Some("Rembrandt")),
    ("The Death of Socrates", Some("Jacques Louis David")),
    ("Joan of Arc", Some("Jules Bastien-Lepage")),
    ("Self-Portrait with a Straw Hat", Some("Vincent van Gogh")),
    ("Cypresses", Some("Vincent van Gogh")),
    ("Wheat Field with Cypresses", Some("Vincent van Gogh")),
    ("The Gulf Stream", Some("Winslow Homer")),
    // European paintings
    ("The Card Players", Some("Paul Cézanne")),
    ("Young Woman with a Water Pitcher", Some("Johannes Vermeer")),
    ("A Maid Asleep", Some("Johannes Vermeer")),
    ("Allegory of the Catholic Faith", Some("Johannes Vermeer")),
    ("Study of a Young Woman", Some("Johannes Vermeer")),
    ("Woman with a Lute", Some("Johannes Vermeer")),
    ("The Harvesters", Some("Pieter Bruegel")),
    ("Portrait of a Young Man", Some("Bronzino")),
    ("The Musicians", Some("Caravaggio")),
    ("The Denial of Saint Peter", Some("Caravaggio")),
    // More European masters
    ("Juan de Pareja", Some("Diego Velázquez")),
    ("View of Toledo", Some("El Greco")),
    ("Portrait of a Cardinal", Some("El Greco")),
    ("The Vision of Saint John", Some("El Greco")),
    ("The Toilet of Bathsheba", Some("Rembrandt")),
    ("Flora", Some("Rembrandt")),
    ("Self-Portrait", Some("Rembrandt")),
    ("Herman Doomer", Some("Rembrandt")),
    ("Hendrickje Stoffels", Some("Rembrandt")),
    ("Lucretia", Some("Rembrandt")),
    // Impressionism
    ("The Dance Class", Some("Edgar Degas")),
    ("A Woman Seated beside a Vase of Flowers", Some("Edgar Degas")),
    ("The Rehearsal Onstage", Some("Edgar Degas")),
    ("Woman with a Parrot", Some("Gustave Courbet")),
    ("Boating", Some("Édouard Manet")),
    ("The Spanish Singer", Some("Édouard Manet")),
    ("Woman Reading", Some("Édouard Manet")),
    ("Garden at Sainte-Adresse", Some("Claude Monet")),
    ("Bridge over a Pond of Water Lilies", Some("Claude Monet")),
    ("Water Lilies", Some("Claude Monet")),
    // Post-impressionism and modern
    ("Mont Sainte-Victoire", Some("Paul Cézanne")),
    ("Ia Orana Maria", Some("Paul Gauguin")),
    ("Two Tahitian Women", Some("Paul Gauguin")),
    ("The Siesta", Some("Paul Gauguin")),
    ("Arrangement in Grey and Black", Some("James McNeill Whistler")),
    ("Shoes", Some("Vincent van Gogh")),
    ("Irises", Some("Vincent van Gogh")),
    ("L'Estaque", Some("Paul Cézanne")),
    ("Bathers", Some("Paul Cézanne")),
    ("Still Life with Apples", Some("Paul Cézanne")),
    // American art
    ("Max Schmitt in a Single Scull", Some("Thomas Eakins")),
    ("The Rocky Mountains, Lander's Peak", Some("Albert Bierstadt")),
    ("The Heart of the Andes", Some("Frederic Edwin Church")),
    ("Fur Traders Descending the Missouri", Some("George Caleb Bingham")),
    ("The Oxbow", Some("Thomas Cole")),
    ("Northeaster", Some("Winslow Homer")),
    ("Snap the Whip", Some("Winslow Homer")),
    ("The Voyage of Life", Some("Thomas Cole")),
    ("Lake George", Some("John Frederick Kensett")),
    ("Kindred Spirits", Some("Asher Brown Durand")),
    // Sculpture and decorative arts
    ("Perseus with the Head of Medusa", Some("Antonio Canova")),
    ("Ugolino and His Sons", Some("Jean-Baptiste Carpeaux")),
    ("The Little Fourteen-Year-Old Dancer", Some("Edgar Degas")),
    ("Adam", Some("Auguste Rodin")),
    ("The Thinker", Some("Auguste Rodin")),
    ("Bust of a Woman", Some("Francesco Laurana")),
    ("Armor of Henry II of France", None),
    ("The Unicorn in Captivity", None),
    ("The Unicorn Defends Itself", None),
    ("The Hunters Enter the Woods", None),
    // Asian art
    ("Water and Moon Guanyin Bodhisattva", None),
    ("Standing Buddha", None),
    ("Seated Buddha", None),
    ("The Great Wave off Kanagawa", Some("Katsushika Hokusai")),
    ("Under the Wave off Kanagawa", Some("Katsushika Hokusai")),
    ("Old Plum", Some("Kano Sansetsu")),
    ("Night Rain at Karasaki", Some("Utagawa Hiroshige")),
    ("Bamboo and Rock", None),
    ("Red and White Plum Blossoms", None),
    ("Portrait of the Zen Master Zhongfeng Mingben", None),
    // Egyptian art
    ("Sphinx of Hatshepsut", None),
    ("Seated Statue of Hatshepsut", None),
    ("Hippopotamus", Some("Egyptian")),
    ("Heart Scarab", None),
    ("Canopic Jar", None),
    ("Standing Hippopotamus", None),
    ("William the Hippo", None),
    ("Cult image of the god Ptah", None),
    ("Face of Senwosret III", None),
    ("Sphinx of Amenhotep III", None),
    // Greek and Roman art
    ("Marble statue of a kouros", None),
    ("Marble statue of an old woman", None),
    ("Bronze statue of a horse", None),
    ("Statue of Eros sleeping", None),
    ("Marble grave stele of a little girl", None),
    ("Terracotta lekythos", None),
    ("Terracotta column-krater", None),
    ("Marble head of Athena", None),
    (
        "Marble sarcophagus with the contest between the Muses and the Sirens",
        None,
    ),
    ("Sleeping Eros", None),
];

/// Materializes the compiled-in highlight list as resolver queries.
pub fn highlight_queries() -> Vec<Query> {
    HIGHLIGHTS
        .iter()
        .map(|(title, artist)| Query::new(title, *artist))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::highlight_queries;

    #[test]
    fn test_highlight_list_is_complete() {
        let queries = highlight_queries();
        assert_eq!(queries.len(), 100);
    }

    #[test]
    fn test_no_empty_titles() {
        assert!(highlight_queries()
            .iter()
            .all(|query| !query.title.trim().is_empty()));
    }
}
