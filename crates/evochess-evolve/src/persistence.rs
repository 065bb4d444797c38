//! Writing a finished population out to disk.

use std::fs;
use std::io;
use std::path::Path;

use evochess_nn::ChessNetwork;
use tracing::debug;

/// Width of the zero-padded generation-slot number in `save_NNNN.txt`.
const FILENAME_DIGITS: usize = 4;

/// Write every network in `population` to `save_NNNN.txt` (four zero-padded
/// digits, 1-indexed) inside `dir`, creating `dir` if it doesn't exist.
///
/// This is the distilled spec's normative zero-padded filename format, not
/// the original source's filename-construction bug (`{'s','a','v','e','_',
/// i, ...}`, which casts a raw integer into a single `char` instead of
/// formatting decimal digits).
pub fn save_population(population: &[ChessNetwork], dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    for (i, net) in population.iter().enumerate() {
        let filename = format!("save_{:0width$}.txt", i + 1, width = FILENAME_DIGITS);
        let path = dir.join(&filename);
        fs::write(&path, net.to_text())?;
        debug!(file = %filename, "wrote network to disk");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn writes_zero_padded_filenames_and_round_trips() {
        let mut rng = StdRng::seed_from_u64(1);
        let population = vec![
            ChessNetwork::random(&[64, 4, 1], &mut rng).unwrap(),
            ChessNetwork::random(&[64, 4, 1], &mut rng).unwrap(),
        ];
        let dir = std::env::temp_dir().join(format!("evochess-evolve-test-{}", std::process::id()));
        save_population(&population, &dir).unwrap();

        let first = dir.join("save_0001.txt");
        let second = dir.join("save_0002.txt");
        assert!(first.exists());
        assert!(second.exists());

        let text = fs::read_to_string(&first).unwrap();
        let read_back = ChessNetwork::read(&text).unwrap();
        assert_eq!(read_back.to_text(), population[0].to_text());

        fs::remove_dir_all(&dir).unwrap();
    }
}
