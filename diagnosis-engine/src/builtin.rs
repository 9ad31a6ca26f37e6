//! Built-in Spanish rule set for household appliances.
//!
//! Priority: power, then leak, then noise/vibration, then the generic fallback.

use crate::{
    diagnosis::{DEFAULT_CONFIDENCE, Diagnosis, EMPTY_INPUT_CONFIDENCE},
    rules::{Rule, RuleSet},
};

pub const POWER_RULE_ID: &str = "power";
pub const LEAK_RULE_ID: &str = "leak";
pub const NOISE_RULE_ID: &str = "noise_vibration";

impl RuleSet {
    /// Rule set served when no rule file is configured.
    pub fn builtin() -> Self {
        Self {
            empty: Diagnosis::new(
                "Describe el problema (equipo, marca/modelo, síntomas) para sugerir un diagnóstico.",
                EMPTY_INPUT_CONFIDENCE,
                [
                    "Escribe el equipo y marca/modelo",
                    "Indica qué falla exactamente (no enciende, ruido, fuga, etc.)",
                    "Agrega foto/video si es posible",
                ],
            ),
            rules: vec![
                Rule::new(
                    POWER_RULE_ID,
                    ["no enciende", "no prende"],
                    Diagnosis::new(
                        "Parece un problema de alimentación eléctrica o fuente (cable, toma, fusible interno o placa).",
                        DEFAULT_CONFIDENCE,
                        [
                            "Prueba otro enchufe/toma eléctrica",
                            "Verifica cable y cargador (si aplica)",
                            "Si huele a quemado o hubo chispa: NO lo enciendas y solicita técnico",
                        ],
                    ),
                ),
                Rule::new(
                    LEAK_RULE_ID,
                    ["fuga", "gotea", "agua"],
                    Diagnosis::new(
                        "Posible fuga por manguera/sello/empaque. Se recomienda cortar el agua/energía y revisar conexiones.",
                        DEFAULT_CONFIDENCE,
                        [
                            "Cierra la llave de agua (si aplica) y desconecta energía",
                            "Revisa mangueras y uniones visibles",
                            "Toma fotos de la zona de fuga para el técnico",
                        ],
                    ),
                ),
                Rule::new(
                    NOISE_RULE_ID,
                    ["ruido", "vibra"],
                    Diagnosis::new(
                        "Puede ser desbalance, pieza floja o desgaste de rodamientos/ventilador. Conviene revisar fijaciones y estado de partes móviles.",
                        DEFAULT_CONFIDENCE,
                        [
                            "Revisa tornillos/soportes y nivelación",
                            "Evita usar el equipo si el ruido aumenta",
                            "Describe cuándo ocurre (al arrancar, en carga, constante)",
                        ],
                    ),
                ),
            ],
            fallback: Diagnosis::new(
                "Diagnóstico preliminar: puede ser una falla común de conexión/consumo/ajuste. Un técnico puede confirmar en sitio con pruebas básicas.",
                DEFAULT_CONFIDENCE,
                [
                    "Indica marca/modelo y tiempo de uso",
                    "Describe síntomas y cuándo empezó",
                    "Adjunta fotos del equipo y del área de instalación",
                ],
            ),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
