pub const BASE_URL: &str = "https://maxtitanium.eu";

pub const NUTRITION_PANEL_TITLE: &str = "Informação Nutricional";

/// `(category name, listing url)` crawled by default
pub const DEFAULT_CATEGORIES: [(&str, &str); 3] = [
    ("Pré-treinos", "https://maxtitanium.eu/collections/pre-treinos"),
    ("Proteínas", "https://maxtitanium.eu/collections/proteinas"),
    (
        "Creatinas e Aminoácidos",
        "https://maxtitanium.eu/collections/creatinas-e-aminoacidos",
    ),
];

pub const TEST_PRODUCT_URL: &str =
    "https://maxtitanium.eu/products/top-whey-3w-sabor-900g-brigadeiro";
pub const TEST_PRODUCT_CATEGORY: &str = "Proteínas";

pub const OUTPUT_DIR: &str = "dados";
pub const PRODUCT_URLS_BASENAME: &str = "urls_produtos_europa_estrutura_real";
pub const NUTRITION_FILENAME: &str = "dados_nutricionais.csv";
pub const TEST_PRODUCT_FILENAME: &str = "teste_um_produto.csv";
