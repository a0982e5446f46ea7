//! Surah reference catalog
//!
//! The 114 surahs in canonical order with their verse counts. The table is a
//! compile-time constant, so every [`SurahCatalog`] handle is read-only and
//! safe to share between threads without coordination.

use crate::core::error::RangeError;

/// Number of surahs in the catalog.
pub const SURAH_COUNT: u32 = 114;

/// One surah of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurahReference {
    /// Canonical number (1-114)
    pub number: u32,

    /// Arabic name without the "سورة" prefix (e.g., "الفاتحة")
    pub name: &'static str,

    /// Latin transliteration (e.g., "Al-Fatihah")
    pub english_name: &'static str,

    /// Number of verses, always positive
    pub verse_count: u32,
}

const fn surah(
    number: u32,
    name: &'static str,
    english_name: &'static str,
    verse_count: u32,
) -> SurahReference {
    SurahReference {
        number,
        name,
        english_name,
        verse_count,
    }
}

/// Indexed by surah number minus one.
static SURAHS: [SurahReference; SURAH_COUNT as usize] = [
    surah(1, "الفاتحة", "Al-Fatihah", 7),
    surah(2, "البقرة", "Al-Baqarah", 286),
    surah(3, "آل عمران", "Al-Imran", 200),
    surah(4, "النساء", "An-Nisa", 176),
    surah(5, "المائدة", "Al-Ma'idah", 120),
    surah(6, "الأنعام", "Al-An'am", 165),
    surah(7, "الأعراف", "Al-A'raf", 206),
    surah(8, "الأنفال", "Al-Anfal", 75),
    surah(9, "التوبة", "At-Tawbah", 129),
    surah(10, "يونس", "Yunus", 109),
    surah(11, "هود", "Hud", 123),
    surah(12, "يوسف", "Yusuf", 111),
    surah(13, "الرعد", "Ar-Ra'd", 43),
    surah(14, "إبراهيم", "Ibrahim", 52),
    surah(15, "الحجر", "Al-Hijr", 99),
    surah(16, "النحل", "An-Nahl", 128),
    surah(17, "الإسراء", "Al-Isra", 111),
    surah(18, "الكهف", "Al-Kahf", 110),
    surah(19, "مريم", "Maryam", 98),
    surah(20, "طه", "Ta-Ha", 135),
    surah(21, "الأنبياء", "Al-Anbiya", 112),
    surah(22, "الحج", "Al-Hajj", 78),
    surah(23, "المؤمنون", "Al-Mu'minun", 118),
    surah(24, "النور", "An-Nur", 64),
    surah(25, "الفرقان", "Al-Furqan", 77),
    surah(26, "الشعراء", "Ash-Shu'ara", 227),
    surah(27, "النمل", "An-Naml", 93),
    surah(28, "القصص", "Al-Qasas", 88),
    surah(29, "العنكبوت", "Al-Ankabut", 69),
    surah(30, "الروم", "Ar-Rum", 60),
    surah(31, "لقمان", "Luqman", 34),
    surah(32, "السجدة", "As-Sajdah", 30),
    surah(33, "الأحزاب", "Al-Ahzab", 73),
    surah(34, "سبأ", "Saba", 54),
    surah(35, "فاطر", "Fatir", 45),
    surah(36, "يس", "Ya-Sin", 83),
    surah(37, "الصافات", "As-Saffat", 182),
    surah(38, "ص", "Sad", 88),
    surah(39, "الزمر", "Az-Zumar", 75),
    surah(40, "غافر", "Ghafir", 85),
    surah(41, "فصلت", "Fussilat", 54),
    surah(42, "الشورى", "Ash-Shura", 53),
    surah(43, "الزخرف", "Az-Zukhruf", 89),
    surah(44, "الدخان", "Ad-Dukhan", 59),
    surah(45, "الجاثية", "Al-Jathiyah", 37),
    surah(46, "الأحقاف", "Al-Ahqaf", 35),
    surah(47, "محمد", "Muhammad", 38),
    surah(48, "الفتح", "Al-Fath", 29),
    surah(49, "الحجرات", "Al-Hujurat", 18),
    surah(50, "ق", "Qaf", 45),
    surah(51, "الذاريات", "Adh-Dhariyat", 60),
    surah(52, "الطور", "At-Tur", 49),
    surah(53, "النجم", "An-Najm", 62),
    surah(54, "القمر", "Al-Qamar", 55),
    surah(55, "الرحمن", "Ar-Rahman", 78),
    surah(56, "الواقعة", "Al-Waqi'ah", 96),
    surah(57, "الحديد", "Al-Hadid", 29),
    surah(58, "المجادلة", "Al-Mujadilah", 22),
    surah(59, "الحشر", "Al-Hashr", 24),
    surah(60, "الممتحنة", "Al-Mumtahanah", 13),
    surah(61, "الصف", "As-Saff", 14),
    surah(62, "الجمعة", "Al-Jumu'ah", 11),
    surah(63, "المنافقون", "Al-Munafiqun", 11),
    surah(64, "التغابن", "At-Taghabun", 18),
    surah(65, "الطلاق", "At-Talaq", 12),
    surah(66, "التحريم", "At-Tahrim", 12),
    surah(67, "الملك", "Al-Mulk", 30),
    surah(68, "القلم", "Al-Qalam", 52),
    surah(69, "الحاقة", "Al-Haqqah", 52),
    surah(70, "المعارج", "Al-Ma'arij", 44),
    surah(71, "نوح", "Nuh", 28),
    surah(72, "الجن", "Al-Jinn", 28),
    surah(73, "المزمل", "Al-Muzzammil", 20),
    surah(74, "المدثر", "Al-Muddaththir", 56),
    surah(75, "القيامة", "Al-Qiyamah", 40),
    surah(76, "الإنسان", "Al-Insan", 31),
    surah(77, "المرسلات", "Al-Mursalat", 50),
    surah(78, "النبأ", "An-Naba", 40),
    surah(79, "النازعات", "An-Nazi'at", 46),
    surah(80, "عبس", "Abasa", 42),
    surah(81, "التكوير", "At-Takwir", 29),
    surah(82, "الانفطار", "Al-Infitar", 19),
    surah(83, "المطففين", "Al-Mutaffifin", 36),
    surah(84, "الانشقاق", "Al-Inshiqaq", 25),
    surah(85, "البروج", "Al-Buruj", 22),
    surah(86, "الطارق", "At-Tariq", 17),
    surah(87, "الأعلى", "Al-A'la", 19),
    surah(88, "الغاشية", "Al-Ghashiyah", 26),
    surah(89, "الفجر", "Al-Fajr", 30),
    surah(90, "البلد", "Al-Balad", 20),
    surah(91, "الشمس", "Ash-Shams", 15),
    surah(92, "الليل", "Al-Layl", 21),
    surah(93, "الضحى", "Ad-Duha", 11),
    surah(94, "الشرح", "Ash-Sharh", 8),
    surah(95, "التين", "At-Tin", 8),
    surah(96, "العلق", "Al-Alaq", 19),
    surah(97, "القدر", "Al-Qadr", 5),
    surah(98, "البينة", "Al-Bayyinah", 8),
    surah(99, "الزلزلة", "Az-Zalzalah", 8),
    surah(100, "العاديات", "Al-Adiyat", 11),
    surah(101, "القارعة", "Al-Qari'ah", 11),
    surah(102, "التكاثر", "At-Takathur", 8),
    surah(103, "العصر", "Al-Asr", 3),
    surah(104, "الهمزة", "Al-Humazah", 9),
    surah(105, "الفيل", "Al-Fil", 5),
    surah(106, "قريش", "Quraysh", 4),
    surah(107, "الماعون", "Al-Ma'un", 7),
    surah(108, "الكوثر", "Al-Kawthar", 3),
    surah(109, "الكافرون", "Al-Kafirun", 6),
    surah(110, "النصر", "An-Nasr", 3),
    surah(111, "المسد", "Al-Masad", 5),
    surah(112, "الإخلاص", "Al-Ikhlas", 4),
    surah(113, "الفلق", "Al-Falaq", 5),
    surah(114, "الناس", "An-Nas", 6),
];

static STANDARD: SurahCatalog = SurahCatalog { entries: &SURAHS };

/// Read-only view over the surah table
#[derive(Debug, Clone, Copy)]
pub struct SurahCatalog {
    entries: &'static [SurahReference],
}

impl SurahCatalog {
    /// The standard catalog, initialized at compile time.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Look up a surah by number.
    ///
    /// # Errors
    /// Returns [`RangeError::SurahOutOfRange`] if `surah` is not in `1..=114`.
    pub fn lookup(&self, surah: u32) -> Result<&'static SurahReference, RangeError> {
        if !(1..=SURAH_COUNT).contains(&surah) {
            return Err(RangeError::SurahOutOfRange { surah });
        }
        self.entries
            .get((surah - 1) as usize)
            .ok_or(RangeError::SurahOutOfRange { surah })
    }

    /// Number of verses in a surah.
    ///
    /// # Errors
    /// Returns [`RangeError::SurahOutOfRange`] if `surah` is not in `1..=114`.
    pub fn verse_count(&self, surah: u32) -> Result<u32, RangeError> {
        self.lookup(surah).map(|s| s.verse_count)
    }

    /// Arabic name of a surah.
    ///
    /// # Errors
    /// Returns [`RangeError::SurahOutOfRange`] if `surah` is not in `1..=114`.
    pub fn name(&self, surah: u32) -> Result<&'static str, RangeError> {
        self.lookup(surah).map(|s| s.name)
    }

    /// `(number, name)` pairs in canonical order, for pickers.
    pub fn list_options(&self) -> impl Iterator<Item = (u32, &'static str)> + '_ {
        self.entries.iter().map(|s| (s.number, s.name))
    }

    /// All entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &'static SurahReference> {
        self.entries.iter()
    }

    /// Number of surahs in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty (never true for the standard catalog).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of verse counts for surahs `from..=to`; zero when `from > to`.
    ///
    /// # Errors
    /// Returns [`RangeError::SurahOutOfRange`] if a bound of a non-empty span is not in `1..=114`.
    pub fn verses_between(&self, from: u32, to: u32) -> Result<u32, RangeError> {
        if from > to {
            return Ok(0);
        }
        self.lookup(from)?;
        self.lookup(to)?;
        Ok(self.entries[(from - 1) as usize..to as usize]
            .iter()
            .map(|s| s.verse_count)
            .sum())
    }

    /// Total verses in the whole catalog.
    #[must_use]
    pub fn total_verses(&self) -> u32 {
        self.entries.iter().map(|s| s.verse_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_numbers_are_contiguous() {
        let catalog = SurahCatalog::standard();
        assert_eq!(catalog.len(), SURAH_COUNT as usize);
        for (idx, surah) in catalog.iter().enumerate() {
            assert_eq!(surah.number as usize, idx + 1);
        }
    }

    #[test]
    fn test_names_are_distinct() {
        let catalog = SurahCatalog::standard();
        let arabic: HashSet<_> = catalog.iter().map(|s| s.name).collect();
        let english: HashSet<_> = catalog.iter().map(|s| s.english_name).collect();
        assert_eq!(arabic.len(), SURAH_COUNT as usize);
        assert_eq!(english.len(), SURAH_COUNT as usize);
    }

    #[test]
    fn test_known_counts() {
        let catalog = SurahCatalog::standard();
        assert_eq!(catalog.verse_count(1), Ok(7));
        assert_eq!(catalog.verse_count(2), Ok(286));
        assert_eq!(catalog.verse_count(103), Ok(3));
        assert_eq!(catalog.verse_count(114), Ok(6));
        assert_eq!(catalog.total_verses(), 6236);
    }

    #[test]
    fn test_lookup_rejects_out_of_range() {
        let catalog = SurahCatalog::standard();
        assert_eq!(
            catalog.lookup(0),
            Err(RangeError::SurahOutOfRange { surah: 0 })
        );
        assert_eq!(
            catalog.lookup(115),
            Err(RangeError::SurahOutOfRange { surah: 115 })
        );
        assert!(catalog.name(u32::MAX).is_err());
    }

    #[test]
    fn test_verses_between() {
        let catalog = SurahCatalog::standard();
        assert_eq!(catalog.verses_between(1, 2), Ok(7 + 286));
        assert_eq!(catalog.verses_between(3, 2), Ok(0));
        assert_eq!(catalog.verses_between(1, 114), Ok(6236));
        assert!(catalog.verses_between(113, 115).is_err());
    }

    #[test]
    fn test_list_options_order() {
        let options: Vec<_> = SurahCatalog::standard().list_options().collect();
        assert_eq!(options.first(), Some(&(1, "الفاتحة")));
        assert_eq!(options.last(), Some(&(114, "الناس")));
    }
}
