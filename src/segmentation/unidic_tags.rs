//Unidic POS: https://gist.github.com/masayu-a/e3eee0637c07d4019ec9

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnidicTag {
    // Main POS categories
    Daimeshi,     // Pronoun (代名詞) //pos1
    Fukushi,      // Adverb (副詞) //pos1
    Jodoushi,     // Auxiliary verb (助動詞) //pos1
    Doushi,       // Verb (動詞) //pos1
    Joshi,        // Particle (助詞) //pos1
    Meishi,       // Noun (名詞) //pos1
    Keiyoushi,    // Adjective (形容詞) //pos1
    Keijoushi,    // Adjectival noun (形状詞) //pos1
    Setsuzokushi, // Conjunction (接続詞) //pos1
    Kandoushi,    // Interjection (感動詞) //pos1
    Rentaishi,    // Adnominal (連体詞) //pos1
    Kigou,        // Symbol (記号) //pos1
    Hojokigou,    // Supplementary symbols (補助記号) //pos1
    Settouji,     // Prefix (接頭辞) //pos1
    Setsubiji,    // Suffix (接尾辞) //pos1
    Firaa,        // Filler (フィラー) //pos1
    Kuuhaku,      // Whitespace (空白) //pos1

    // Noun types
    Koyuumeishi,  // Proper noun (固有名詞) //pos2
    Futsuumeishi, // Common noun (普通名詞) //pos2
    Suushi,       // Numeral (数詞) //pos2

    // Suffix types
    Meishiteki,    // Nominal suffix (名詞的) //pos2
    Doushiteki,    // Verbal suffix (動詞的) //pos2
    Keiyoushiteki, // Adjectival suffix (形容詞的) //pos2

    // Noun subtypes
    Sahenkanou,          // Noun that can take "suru" (サ変可能) //pos3
    Sahenkeijoushikanou, // Adjectival noun that can take "suru" (サ変形状詞可能) //pos3
    Keijoushikanou, // Adjectival noun (形状詞可能) //pos3
    Fukushikanou,   // Noun that can function as an adverb (副詞可能) //pos3

    Ippan,          // General (一般) //pos2, pos3, pos4
    Hijiritsukanou, // Bound word (非自立可能) //pos2

    // Particles (助詞)
    Kakarijoshi,    // Binding particle (係助詞) //pos2
    Fukujoshi,      // Adverbial particle (副助詞) //pos2
    Setsuzokujoshi, // Conjunctive particle (接続助詞) //pos2
    Kakujoshi,      // Case-marking particle (格助詞) //pos2
    Juntaijoshi,    // Nominalizing particle (準体助詞) //pos2
    Shuujoshi,      // Sentence-ending particle (終助詞) //pos2

    Kuten,  //Period (句点) //pos2
    Touten, //Comma (読点) //pos2

    //Non-unidic types
    Unset,   // *
    Unknown, // Anything this crate does not match on
}

impl From<&str> for UnidicTag {
    fn from(value: &str) -> Self {
        match value {
            "代名詞" => Self::Daimeshi,
            "副詞" => Self::Fukushi,
            "助動詞" => Self::Jodoushi,
            "動詞" => Self::Doushi,
            "助詞" => Self::Joshi,
            "名詞" => Self::Meishi,
            "形容詞" => Self::Keiyoushi,
            "形状詞" => Self::Keijoushi,
            "接続詞" => Self::Setsuzokushi,
            "感動詞" => Self::Kandoushi,
            "連体詞" => Self::Rentaishi,
            "記号" => Self::Kigou,
            "補助記号" => Self::Hojokigou,
            "接頭辞" => Self::Settouji,
            "接尾辞" => Self::Setsubiji,
            "フィラー" => Self::Firaa,
            "空白" => Self::Kuuhaku,

            "固有名詞" => Self::Koyuumeishi,
            "普通名詞" => Self::Futsuumeishi,
            "数詞" => Self::Suushi,

            "名詞的" => Self::Meishiteki,
            "動詞的" => Self::Doushiteki,
            "形容詞的" => Self::Keiyoushiteki,

            "サ変可能" => Self::Sahenkanou,
            "サ変形状詞可能" => Self::Sahenkeijoushikanou,
            "形状詞可能" => Self::Keijoushikanou,
            "副詞可能" => Self::Fukushikanou,

            "一般" => Self::Ippan,
            "非自立可能" => Self::Hijiritsukanou,

            "係助詞" => Self::Kakarijoshi,
            "副助詞" => Self::Fukujoshi,
            "接続助詞" => Self::Setsuzokujoshi,
            "格助詞" => Self::Kakujoshi,
            "準体助詞" => Self::Juntaijoshi,
            "終助詞" => Self::Shuujoshi,

            "句点" => Self::Kuten,
            "読点" => Self::Touten,

            "*" | "" => Self::Unset,

            _ => UnidicTag::Unknown,
        }
    }
}
