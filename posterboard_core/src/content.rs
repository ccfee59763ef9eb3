//! Static lesson material: questions, poster topics, menu tiles and games.

use crate::media::MediaRef;
use crate::screen::ScreenId;

/// A multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
}

impl Question {
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }

    pub fn correct_option(&self) -> &'static str {
        self.options[self.correct]
    }

    pub fn has_option(&self, index: usize) -> bool {
        index < self.options.len()
    }
}

pub const QUIZ_QUESTIONS: [Question; 5] = [
    Question {
        prompt: "Apa yang harus kita lakukan untuk menjaga keindahan sekolah?",
        options: &[
            "Membuang sampah sembarangan",
            "Mencoret-coret dinding sekolah",
            "Membuang sampah pada tempatnya",
            "Membiarkan tanaman layu",
        ],
        correct: 2,
    },
    Question {
        prompt: "Contoh kegiatan yang menunjukkan persatuan di sekolah adalah...",
        options: &[
            "Bermain sendiri saat istirahat",
            "Kerja bakti membersihkan kelas",
            "Tidak membantu teman yang kesulitan",
            "Berebut mainan dengan teman",
        ],
        correct: 1,
    },
    Question {
        prompt: "Mengapa kita perlu peduli dengan lingkungan sekolah?",
        options: &[
            "Agar sekolah menjadi nyaman untuk belajar",
            "Agar mendapat hadiah dari guru",
            "Agar tidak dihukum",
            "Agar bisa pulang cepat",
        ],
        correct: 0,
    },
    Question {
        prompt: "Nilai Pancasila yang diterapkan saat kita bekerja sama menjaga kebersihan sekolah adalah...",
        options: &[
            "Keadilan sosial",
            "Gotong royong",
            "Musyawarah mufakat",
            "Semua jawaban benar",
        ],
        correct: 3,
    },
    Question {
        prompt: "Apa yang sebaiknya kita lakukan jika melihat sampah di halaman sekolah?",
        options: &[
            "Membiarkannya saja",
            "Menunggu petugas kebersihan",
            "Memungut dan membuangnya ke tempat sampah",
            "Menyuruh teman untuk membuangnya",
        ],
        correct: 2,
    },
];

pub const ADVENTURE_QUESTIONS: [Question; 3] = [
    Question {
        prompt: "Apa yang harus kamu lakukan jika melihat temanmu jatuh di halaman sekolah?",
        options: &[
            "Menertawakan",
            "Pura-pura tidak melihat",
            "Membantu dan mengantarkan ke UKS",
            "Memanggil teman lain untuk menertawakan",
        ],
        correct: 2,
    },
    Question {
        prompt: "Bagaimana cara terbaik menyelesaikan perselisihan dengan teman?",
        options: &[
            "Berkelahi",
            "Mengadu ke guru",
            "Membicarakan baik-baik dan berdamai",
            "Mendiamkan selamanya",
        ],
        correct: 2,
    },
    Question {
        prompt: "Apa yang sebaiknya kamu lakukan jika temanmu lupa membawa bekal?",
        options: &[
            "Membiarkannya kelaparan",
            "Berbagi bekal dengannya",
            "Mengejeknya",
            "Menyuruhnya pulang",
        ],
        correct: 1,
    },
];

/// A poster topic on the material screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub image: MediaRef,
}

pub const TOPICS: [Topic; 3] = [
    Topic {
        id: "keindahan",
        title: "Keindahan Sekolahku",
        body: "Sekolah yang indah adalah sekolah yang bersih, rapi, dan nyaman. Kita semua bertanggung jawab menjaga keindahan sekolah dengan tidak membuang sampah sembarangan, merapikan meja dan kursi setelah digunakan, dan merawat tanaman di sekitar sekolah. Dengan sekolah yang indah, kita akan merasa senang belajar dan bermain bersama teman-teman.",
        image: MediaRef::new(
            "/images/poster-keindahan-sekolahku.png",
            "Keindahan Sekolahku",
        ),
    },
    Topic {
        id: "peduli",
        title: "Peduli Lingkungan Sekolah",
        body: "Peduli lingkungan sekolah berarti kita ikut menjaga kebersihan dan kenyamanan sekolah. Kita bisa melakukan kegiatan seperti kerja bakti membersihkan kelas, menyiram tanaman, dan membuang sampah pada tempatnya. Dengan peduli pada lingkungan sekolah, kita telah menerapkan nilai Pancasila yaitu gotong royong dan kebersamaan.",
        image: MediaRef::new(
            "/images/poster-peduli-lingkungan-sekolah.png",
            "Peduli Lingkungan Sekolah",
        ),
    },
    Topic {
        id: "bersatu",
        title: "Bersatu Menjaga Sekolah",
        body: "Bersatu dalam menjaga sekolah artinya kita bekerja sama dengan teman-teman untuk merawat sekolah kita. Kita bisa membuat jadwal piket kelas, saling mengingatkan untuk menjaga kebersihan, dan bersama-sama memperbaiki fasilitas sekolah yang rusak. Dengan bersatu, pekerjaan menjadi lebih ringan dan sekolah kita akan selalu terjaga dengan baik.",
        image: MediaRef::new(
            "/images/poster-bersatu-menjaga-sekolah.png",
            "Bersatu Menjaga Sekolah",
        ),
    },
];

pub const BACKGROUND: MediaRef = MediaRef::new("/images/background.png", "Papan tulis");

pub const INSTRUCTIONS_TITLE: &str = "Persatuan di Lingkungan Sekolah";

pub const INSTRUCTIONS_POSTER: MediaRef = MediaRef::new(
    "/images/poster-persatuan.jpeg",
    "Poster Persatuan di Lingkungan Sekolah",
);

/// Notes printed beneath the instructions poster
pub const INSTRUCTIONS_NOTES: [(&str, &[&str]); 3] = [
    (
        "Pengertian Persatuan",
        &["Persatuan adalah kebersamaan dalam bekerja sama, saling menghargai, dan hidup rukun meskipun berbeda."],
    ),
    (
        "Contoh Persatuan di Sekolah",
        &[
            "Bekerja sama dalam menjaga kebersihan kelas",
            "Saling membantu teman yang kesulitan belajar",
            "Mengikuti upacara bendera dengan tertib dan penuh semangat",
            "Bermain bersama dengan teman-teman tanpa membedakan siapa pun",
        ],
    ),
    (
        "Tindakan yang Tidak Mencerminkan Persatuan",
        &[
            "Mengolok-olok teman karena perbedaan fisik atau kebiasaan",
            "Tidak mau bekerja sama dengan teman dalam tugas kelompok",
            "Bertindak egois atau hanya memikirkan kepentingan diri sendiri",
        ],
    ),
];

pub const QUIZ_URL: &str = "https://quiz.zep.us/id/play/Qa9RKP";

/// Where a menu tile leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Screen(ScreenId),
    /// Opaque hand-off to the online quiz
    QuizLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: &'static str,
    pub caption: &'static str,
    pub target: MenuTarget,
}

pub const MENU: [MenuEntry; 5] = [
    MenuEntry {
        title: "Materi",
        caption: "Poster materi persatuan",
        target: MenuTarget::Screen(ScreenId::Poster),
    },
    MenuEntry {
        title: "Poster",
        caption: "Poster persatuan di sekolah",
        target: MenuTarget::Screen(ScreenId::Instructions),
    },
    MenuEntry {
        title: "Quiz",
        caption: "Uji pemahamanmu",
        target: MenuTarget::Screen(ScreenId::Quiz),
    },
    MenuEntry {
        title: "Game",
        caption: "Puzzle dan petualangan",
        target: MenuTarget::Screen(ScreenId::Game),
    },
    MenuEntry {
        title: "Quiz Online",
        caption: "Buka di browser",
        target: MenuTarget::QuizLink,
    },
];

pub const PUZZLE_ITEMS: [(u8, &str); 5] = [
    (1, "Meja"),
    (2, "Kursi"),
    (3, "Papan Tulis"),
    (4, "Pigura"),
    (5, "Buku"),
];

pub const PUZZLE_INTRO: &str = "Kelas kita berantakan. Bagaimana sikap kita dalam mengamalkan persatuan di lingkungan sekolah? Ayo bantu merapikan kelas dengan menyusun barang-barang berikut ke tempatnya!";

pub const PUZZLE_DONE: &str = "Dengan bekerja sama dan saling membantu, kita bisa menjaga kebersihan kelas. Ini adalah contoh persatuan di lingkungan sekolah!";

pub const ADVENTURE_INTRO: &str = "temanmu membutuhkan bantuan! Jawab pertanyaan dengan benar untuk menyelamatkannya. Kamu punya 30 detik untuk setiap pertanyaan!";

pub const ADVENTURE_WON: &str = "Kamu telah menyelamatkan temanmu dengan menjawab semua pertanyaan dengan benar! Ini menunjukkan bahwa kamu memahami nilai persatuan di lingkungan sekolah.";

pub const ADVENTURE_LOST: &str = "Sayang sekali, jawabanmu kurang tepat. Jangan menyerah! Coba lagi dan tunjukkan pemahaman tentang persatuan di lingkungan sekolah.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_indices_in_range() {
        for q in QUIZ_QUESTIONS.iter().chain(ADVENTURE_QUESTIONS.iter()) {
            assert!(q.has_option(q.correct), "{}", q.prompt);
            assert!(q.is_correct(q.correct));
        }
    }

    #[test]
    fn test_correct_option_text() {
        assert_eq!(QUIZ_QUESTIONS[3].correct_option(), "Semua jawaban benar");
        assert_eq!(ADVENTURE_QUESTIONS[2].correct_option(), "Berbagi bekal dengannya");
    }

    #[test]
    fn test_menu_reaches_every_section() {
        for screen in [ScreenId::Poster, ScreenId::Instructions, ScreenId::Quiz, ScreenId::Game] {
            assert!(MENU.iter().any(|e| e.target == MenuTarget::Screen(screen)));
        }
        assert!(MENU.iter().any(|e| e.target == MenuTarget::QuizLink));
    }

    #[test]
    fn test_puzzle_item_ids_unique() {
        let mut ids: Vec<u8> = PUZZLE_ITEMS.iter().map(|(id, _)| *id).collect();
        ids.dedup();
        assert_eq!(ids.len(), PUZZLE_ITEMS.len());
    }
}
