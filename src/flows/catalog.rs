//! Built-in analysis flows

use crate::flows::types::{
    AnalysisFlow, AnalysisStep, Difficulty, FieldType, InputField, OutputInsight,
};

use FieldType::*;

const fn field(
    name: &'static str,
    description: &'static str,
    example: &'static str,
    required: bool,
    field_type: FieldType,
) -> InputField {
    InputField {
        name,
        description,
        example,
        required,
        field_type,
    }
}

const fn insight(
    name: &'static str,
    description: &'static str,
    business_value: &'static str,
    visualization: &'static str,
) -> OutputInsight {
    OutputInsight {
        name,
        description,
        business_value,
        visualization,
    }
}

pub const FINANZAS_CREDIT_RISK: AnalysisFlow = AnalysisFlow {
    id: "finanzas-credit-risk",
    name: "Evaluación integral de riesgo crediticio",
    description: "Secuencia de análisis para evaluar, predecir y gestionar el riesgo crediticio en su cartera de clientes",
    industry: "finanzas",
    business_goal: "Reducir tasas de impago mientras se mantiene o aumenta la base de clientes",
    steps: &[
        AnalysisStep {
            id: "step1-segmentation",
            name: "Segmentación de clientes",
            description: "Agrupa clientes en categorías según su comportamiento financiero y características",
            model_type: "kmeans",
            prerequisite_steps: &[],
            input_fields: &[
                field("Historial de pagos", "Registro de pagos puntuales o atrasados de los últimos 24 meses", "Tabla con ID_Cliente, Fecha_Pago, Días_Atraso", true, Numeric),
                field("Datos demográficos", "Información básica como edad, ubicación, estado civil", "Edad: 35, Región: Centro, Estado civil: Casado", true, Categorical),
                field("Ingresos declarados", "Nivel de ingresos mensuales reportados por el cliente", "45000", true, Numeric),
            ],
            output_insights: &[
                insight("Grupos de clientes", "Categorías de clientes con características similares", "Permite diseñar estrategias específicas para cada grupo", "scatter"),
                insight("Características distintivas", "Variables más importantes que definen cada grupo", "Identifica factores clave para diferenciar grupos de riesgo", "radar"),
            ],
            estimated_processing_time: "15-30 minutos",
            difficulty: Difficulty::Basic,
        },
        AnalysisStep {
            id: "step2-risk-prediction",
            name: "Predicción de riesgo de impago",
            description: "Calcula la probabilidad de impago para cada cliente",
            model_type: "random_forest",
            prerequisite_steps: &["step1-segmentation"],
            input_fields: &[
                field("Segmento del cliente", "Grupo al que pertenece el cliente (del paso anterior)", "Grupo 3 - Riesgo moderado", true, Categorical),
                field("Ratio deuda/ingresos", "Proporción de deudas mensuales respecto a ingresos", "0.35", true, Numeric),
                field("Número de productos financieros", "Cantidad de productos que tiene contratados con su entidad", "3", false, Numeric),
            ],
            output_insights: &[
                insight("Probabilidad de impago", "Porcentaje de riesgo de impago en los próximos 6 meses", "Permite tomar decisiones preventivas antes del impago", "bar"),
                insight("Variables influyentes", "Factores que más afectan al riesgo de impago", "Ayuda a entender qué aspectos monitorear para reducir riesgos", "bar"),
            ],
            estimated_processing_time: "30-45 minutos",
            difficulty: Difficulty::Intermediate,
        },
        AnalysisStep {
            id: "step3-optimization",
            name: "Optimización de condiciones crediticias",
            description: "Recomendaciones personalizadas para ajustar condiciones según el perfil de riesgo",
            model_type: "optimization",
            prerequisite_steps: &["step2-risk-prediction"],
            input_fields: &[
                field("Puntuación de riesgo", "Puntuación numérica de riesgo (del paso anterior)", "78.5", true, Numeric),
                field("Márgenes actuales", "Rentabilidad actual de cada producto por cliente", "Tabla con ID_Cliente, Producto, Margen", true, Numeric),
                field("Sensibilidad de precio", "Elasticidad del cliente ante cambios en las condiciones", "0.85", false, Numeric),
            ],
            output_insights: &[
                insight("Ajustes recomendados", "Sugerencias de modificaciones en tasas, plazos o límites", "Balance óptimo entre riesgo y rentabilidad para cada cliente", "table"),
                insight("Impacto proyectado", "Efecto esperado en morosidad y rentabilidad", "Permite evaluar el beneficio de implementar los cambios sugeridos", "line"),
            ],
            estimated_processing_time: "45-60 minutos",
            difficulty: Difficulty::Advanced,
        },
    ],
    total_estimated_time: "2-3 horas",
    recommended_tools: &["PowerBI", "Tableau", "Excel avanzado"],
};

pub const RETAIL_CUSTOMER_LTV: AnalysisFlow = AnalysisFlow {
    id: "retail-customer-ltv",
    name: "Análisis de valor del ciclo de vida del cliente",
    description: "Secuencia para calcular, predecir y optimizar el valor total que un cliente genera durante su relación con la empresa",
    industry: "retail",
    business_goal: "Maximizar el valor de cada cliente e identificar oportunidades de crecimiento",
    steps: &[
        AnalysisStep {
            id: "step1-customer-segmentation",
            name: "Segmentación de clientes",
            description: "Divide a los clientes en grupos significativos según su comportamiento de compra",
            model_type: "kmeans",
            prerequisite_steps: &[],
            input_fields: &[
                field("Historial de compras", "Registro de todas las transacciones de compra de los clientes", "Tabla con ID_Cliente, Fecha, Productos, Monto", true, Numeric),
                field("Frecuencia de compra", "Cada cuánto tiempo realiza compras el cliente", "14 días promedio entre compras", true, Numeric),
                field("Datos demográficos", "Información sobre edad, ubicación, etc.", "Edad: 28, Ciudad: Barcelona", false, Categorical),
            ],
            output_insights: &[
                insight("Segmentos de clientes", "Grupos de clientes con patrones de compra similares", "Permite diseñar estrategias específicas para cada grupo", "scatter"),
                insight("Características de cada segmento", "Qué define a cada grupo de clientes", "Ayuda a entender los diferentes tipos de clientes", "radar"),
            ],
            estimated_processing_time: "20-40 minutos",
            difficulty: Difficulty::Basic,
        },
        AnalysisStep {
            id: "step2-ltv-calculation",
            name: "Cálculo de valor de vida del cliente",
            description: "Calcula el valor pasado y proyectado de cada cliente",
            model_type: "linear_regression",
            prerequisite_steps: &["step1-customer-segmentation"],
            input_fields: &[
                field("Segmento del cliente", "Grupo al que pertenece (del paso anterior)", "Compradores frecuentes de alto valor", true, Categorical),
                field("Historial de gastos", "Montos de compras a lo largo del tiempo", "Tabla con Fecha, Monto, Categoría", true, Numeric),
                field("Tasa de retención", "Probabilidad de que el cliente siga comprando", "78%", true, Numeric),
            ],
            output_insights: &[
                insight("Valor de vida actual", "Estimación del valor total que generará cada cliente", "Permite priorizar esfuerzos en clientes más valiosos", "bar"),
                insight("Proyección futura", "Evolución esperada del valor del cliente", "Ayuda a planificar estrategias a largo plazo", "line"),
            ],
            estimated_processing_time: "30-45 minutos",
            difficulty: Difficulty::Intermediate,
        },
        AnalysisStep {
            id: "step3-recommendation-engine",
            name: "Motor de recomendaciones personalizadas",
            description: "Sugiere productos específicos para aumentar el valor de cada cliente",
            model_type: "recommendation_system",
            prerequisite_steps: &["step2-ltv-calculation"],
            input_fields: &[
                field("Historial de productos", "Productos que ha comprado cada cliente", "Tabla con ID_Cliente, ID_Producto, Fecha", true, Categorical),
                field("Valor de vida calculado", "LTV del paso anterior", "2450€", true, Numeric),
                field("Comportamiento de navegación", "Cómo interactúa el cliente con su sitio web/app", "Páginas visitadas, tiempo en cada sección", false, Categorical),
            ],
            output_insights: &[
                insight("Productos recomendados", "Lista de productos con mayor probabilidad de compra", "Incrementa ventas cruzadas y valor del cliente", "table"),
                insight("Incremento potencial de LTV", "Cuánto puede aumentar el valor del cliente", "Cuantifica el beneficio de las recomendaciones", "bar"),
            ],
            estimated_processing_time: "45-60 minutos",
            difficulty: Difficulty::Advanced,
        },
    ],
    total_estimated_time: "2-3 horas",
    recommended_tools: &["Tableau", "PowerBI", "Customer Data Platform"],
};

pub const TECNOLOGIA_USER_ENGAGEMENT: AnalysisFlow = AnalysisFlow {
    id: "tecnologia-user-engagement",
    name: "Optimización de la retención y engagement de usuarios",
    description: "Secuencia para analizar, predecir y mejorar la participación y retención de usuarios en aplicaciones digitales",
    industry: "tecnologia",
    business_goal: "Incrementar retención de usuarios y tiempo de uso de la plataforma",
    steps: &[
        AnalysisStep {
            id: "step1-analisis-comportamiento",
            name: "Análisis de patrones de comportamiento",
            description: "Identifica cómo interactúan los usuarios con la plataforma",
            model_type: "kmeans",
            prerequisite_steps: &[],
            input_fields: &[
                field("Logs de actividad", "Registro de acciones de usuario en la plataforma", "Usuario, Timestamp, Acción, Sección", true, Categorical),
                field("Tiempo de sesión", "Duración de las sesiones de usuario", "12 minutos promedio", true, Numeric),
                field("Rutas de navegación", "Secuencia de páginas/pantallas visitadas", "Home > Producto > Carrito > Checkout", false, Categorical),
            ],
            output_insights: &[
                insight("Perfiles de uso", "Grupos de usuarios con comportamientos similares", "Permite personalizar la experiencia por tipo de usuario", "scatter"),
                insight("Puntos de fricción", "Áreas donde los usuarios abandonan con frecuencia", "Identifica oportunidades de mejora específicas", "heatmap"),
            ],
            estimated_processing_time: "20-40 minutos",
            difficulty: Difficulty::Basic,
        },
        AnalysisStep {
            id: "step2-prediccion-abandono",
            name: "Predicción de abandono (churn)",
            description: "Calcula la probabilidad de que un usuario deje de usar la plataforma",
            model_type: "xgboost",
            prerequisite_steps: &["step1-analisis-comportamiento"],
            input_fields: &[
                field("Perfil de usuario", "Grupo identificado en el análisis anterior", "Usuario ocasional de alto valor", true, Categorical),
                field("Frecuencia de uso", "Regularidad con la que usa la plataforma", "2.5 días por semana", true, Numeric),
                field("Interacciones recientes", "Actividad en los últimos X días", "Disminución del 30% en acciones", true, Numeric),
            ],
            output_insights: &[
                insight("Riesgo de abandono", "Probabilidad de que cada usuario abandone", "Permite intervenir antes de perder usuarios", "bar"),
                insight("Factores determinantes", "Variables que más influyen en el abandono", "Identifica qué aspectos mejorar prioritariamente", "radar"),
            ],
            estimated_processing_time: "30-45 minutos",
            difficulty: Difficulty::Intermediate,
        },
        AnalysisStep {
            id: "step3-personalizacion-experiencia",
            name: "Personalización dinámica de experiencia",
            description: "Genera recomendaciones para adaptar la experiencia según el perfil",
            model_type: "recommendation_system",
            prerequisite_steps: &["step2-prediccion-abandono"],
            input_fields: &[
                field("Riesgo de abandono", "Probabilidad calculada en el paso anterior", "68%", true, Numeric),
                field("Preferencias de usuario", "Funciones y contenido que más utiliza", "Preferencia por videos, usa principalmente móvil", true, Categorical),
                field("Historial de respuesta", "Cómo ha reaccionado a intervenciones previas", "Responde bien a notificaciones pero ignora emails", false, Categorical),
            ],
            output_insights: &[
                insight("Acciones recomendadas", "Intervenciones sugeridas por usuario", "Maximiza la retención con acciones personalizadas", "table"),
                insight("Impacto proyectado", "Mejora esperada en retención y engagement", "Permite medir el ROI de las intervenciones", "line"),
            ],
            estimated_processing_time: "45-60 minutos",
            difficulty: Difficulty::Advanced,
        },
    ],
    total_estimated_time: "2-3 horas",
    recommended_tools: &["Mixpanel", "Amplitude", "Customer.io"],
};

pub const FINANZAS_FRAUDE_DETECTION: AnalysisFlow = AnalysisFlow {
    id: "finanzas-fraude-detection",
    name: "Detección avanzada de fraude financiero",
    description: "Secuencia de análisis para identificar patrones sospechosos y prevenir fraudes en tiempo real",
    industry: "finanzas",
    business_goal: "Reducir pérdidas por fraude mientras se minimiza la fricción con clientes legítimos",
    steps: &[
        AnalysisStep {
            id: "step1-anomaly-detection",
            name: "Detección de anomalías",
            description: "Identifica transacciones que se desvían del comportamiento normal del cliente",
            model_type: "anomaly_detection",
            prerequisite_steps: &[],
            input_fields: &[
                field("Historial de transacciones", "Registro de movimientos financieros de los últimos 6 meses", "Tabla con Fecha, Monto, Comercio, Tipo_Transacción", true, Numeric),
                field("Ubicación geográfica", "Lugar donde se realizó cada transacción", "Ciudad: Madrid, País: España", true, Categorical),
                field("Dispositivo utilizado", "Tipo de dispositivo desde el que se realizó la transacción", "Mobile, Desktop, ATM", false, Categorical),
            ],
            output_insights: &[
                insight("Puntuación de anomalía", "Calificación de qué tan inusual es cada transacción", "Permite priorizar qué transacciones requieren revisión", "scatter"),
                insight("Patrones temporales", "Comportamiento de transacciones a lo largo del tiempo", "Identifica momentos de mayor riesgo", "line"),
            ],
            estimated_processing_time: "20-40 minutos",
            difficulty: Difficulty::Intermediate,
        },
        AnalysisStep {
            id: "step2-pattern-recognition",
            name: "Reconocimiento de patrones fraudulentos",
            description: "Compara transacciones con patrones conocidos de fraude",
            model_type: "xgboost",
            prerequisite_steps: &["step1-anomaly-detection"],
            input_fields: &[
                field("Puntuación de anomalía", "Resultado del análisis anterior", "0.87", true, Numeric),
                field("Velocidad de transacciones", "Tiempo entre operaciones consecutivas", "45 segundos", true, Numeric),
                field("Cambio en patrones", "Diferencias respecto al comportamiento histórico", "Alto - Compras en categorías nunca utilizadas", true, Categorical),
            ],
            output_insights: &[
                insight("Probabilidad de fraude", "Porcentaje que indica la probabilidad de que sea fraude", "Permite bloquear automáticamente transacciones de alto riesgo", "bar"),
                insight("Factores de riesgo", "Variables que más influyen en la clasificación", "Ayuda a entender qué aspectos monitorear", "radar"),
            ],
            estimated_processing_time: "15-30 minutos",
            difficulty: Difficulty::Advanced,
        },
        AnalysisStep {
            id: "step3-network-analysis",
            name: "Análisis de redes y conexiones",
            description: "Identifica relaciones entre transacciones y entidades para detectar redes fraudulentas",
            model_type: "network_analysis",
            prerequisite_steps: &["step2-pattern-recognition"],
            input_fields: &[
                field("Conexiones entre cuentas", "Transferencias y relaciones entre cuentas", "Tabla con Cuenta_Origen, Cuenta_Destino, Monto, Fecha", true, Categorical),
                field("Información de beneficiarios", "Datos sobre quienes reciben los fondos", "Nombre, Frecuencia de aparición, País", true, Categorical),
                field("Alertas previas", "Registros de alertas anteriores relacionadas", "ID_Alerta, Tipo, Fecha, Resolución", false, Categorical),
            ],
            output_insights: &[
                insight("Gráfico de conexiones", "Visualización de relaciones entre entidades", "Identifica redes complejas difíciles de detectar individualmente", "heatmap"),
                insight("Entidades sospechosas", "Cuentas, beneficiarios o comercios con mayor probabilidad de fraude", "Permite investigar proactivamente antes de más transacciones", "table"),
            ],
            estimated_processing_time: "60-90 minutos",
            difficulty: Difficulty::Advanced,
        },
    ],
    total_estimated_time: "2-4 horas",
    recommended_tools: &["GraphDB", "NetworkX", "Gephi"],
};

pub const EDUCACION_APRENDIZAJE_PERSONALIZADO: AnalysisFlow = AnalysisFlow {
    id: "educacion-aprendizaje-personalizado",
    name: "Análisis de aprendizaje personalizado",
    description: "Secuencia para evaluar, predecir y mejorar el rendimiento académico mediante rutas de aprendizaje personalizadas",
    industry: "educacion",
    business_goal: "Mejorar resultados académicos y reducir tasas de abandono",
    steps: &[
        AnalysisStep {
            id: "step1-perfil-estudiante",
            name: "Perfilado de estudiantes",
            description: "Identifica patrones de aprendizaje y estilos cognitivos",
            model_type: "kmeans",
            prerequisite_steps: &[],
            input_fields: &[
                field("Resultados académicos", "Notas y evaluaciones por asignatura", "Tabla con ID_Estudiante, Asignatura, Calificación", true, Numeric),
                field("Tiempo dedicado", "Horas de estudio o interacción con materiales", "4.5 horas semanales", true, Numeric),
                field("Preferencias de formato", "Tipo de contenido con el que interactúa más", "Video, Texto, Interactivo", false, Categorical),
            ],
            output_insights: &[
                insight("Estilos de aprendizaje", "Categorías de estudiantes según cómo aprenden mejor", "Permite adaptar contenidos al estilo de cada estudiante", "radar"),
                insight("Fortalezas y debilidades", "Áreas donde cada estudiante destaca o necesita apoyo", "Permite enfocar recursos donde más se necesitan", "bar"),
            ],
            estimated_processing_time: "15-30 minutos",
            difficulty: Difficulty::Basic,
        },
        AnalysisStep {
            id: "step2-prediccion-rendimiento",
            name: "Predicción de rendimiento académico",
            description: "Estima el rendimiento futuro y riesgo de fracaso",
            model_type: "linear_regression",
            prerequisite_steps: &["step1-perfil-estudiante"],
            input_fields: &[
                field("Perfil de aprendizaje", "Resultados del análisis anterior", "Visual-práctico", true, Categorical),
                field("Patrones de asistencia", "Registro de asistencia a clases o acceso a plataforma", "85% de asistencia", true, Numeric),
                field("Participación", "Nivel de interacción en actividades", "Alto/Medio/Bajo", true, Categorical),
            ],
            output_insights: &[
                insight("Predicción de calificaciones", "Estimación de resultados futuros por asignatura", "Permite intervenir antes de que surjan problemas", "line"),
                insight("Riesgo de abandono", "Probabilidad de que el estudiante abandone el curso", "Ayuda a implementar medidas de retención", "heatmap"),
            ],
            estimated_processing_time: "30-45 minutos",
            difficulty: Difficulty::Intermediate,
        },
        AnalysisStep {
            id: "step3-ruta-personalizada",
            name: "Generación de ruta de aprendizaje personalizada",
            description: "Crea un itinerario adaptado a cada estudiante",
            model_type: "sequential",
            prerequisite_steps: &["step2-prediccion-rendimiento"],
            input_fields: &[
                field("Objetivos de aprendizaje", "Metas específicas a alcanzar", "Dominio de álgebra lineal", true, Categorical),
                field("Predicciones de rendimiento", "Resultados del análisis anterior", "Calificación esperada: 7.5", true, Numeric),
                field("Recursos disponibles", "Materiales y actividades que pueden asignarse", "Lista de recursos educativos", true, Categorical),
            ],
            output_insights: &[
                insight("Plan de aprendizaje", "Secuencia recomendada de actividades y recursos", "Optimiza el proceso de aprendizaje para cada estudiante", "table"),
                insight("Proyección de mejora", "Estimación de la mejora con el plan personalizado", "Demuestra el valor de la personalización", "line"),
            ],
            estimated_processing_time: "45-60 minutos",
            difficulty: Difficulty::Advanced,
        },
    ],
    total_estimated_time: "2-3 horas",
    recommended_tools: &["Moodle Analytics", "LMS integrado", "Tableau"],
};

pub const SALUD_PREDICCION_PACIENTES: AnalysisFlow = AnalysisFlow {
    id: "salud-prediccion-pacientes",
    name: "Predicción de readmisiones hospitalarias",
    description: "Secuencia para identificar pacientes con alto riesgo de reingreso y planificar intervenciones preventivas",
    industry: "salud",
    business_goal: "Reducir tasas de readmisión y mejorar resultados clínicos",
    steps: &[
        AnalysisStep {
            id: "step1-estratificacion-pacientes",
            name: "Estratificación de pacientes",
            description: "Categoriza pacientes según su perfil clínico y factores de riesgo",
            model_type: "kmeans",
            prerequisite_steps: &[],
            input_fields: &[
                field("Historial clínico", "Diagnósticos previos y tratamientos", "Tabla con ID_Paciente, Diagnóstico, Tratamiento", true, Categorical),
                field("Datos demográficos", "Edad, género y factores sociales", "Edad: 65, Género: F, Situación social: Vive solo", true, Categorical),
                field("Indicadores clínicos", "Valores de pruebas y signos vitales", "Presión arterial, niveles de glucosa, etc.", true, Numeric),
            ],
            output_insights: &[
                insight("Grupos de riesgo", "Categorías de pacientes según su nivel de riesgo", "Permite priorizar recursos de seguimiento", "pie"),
                insight("Factores determinantes", "Variables que más influyen en cada grupo", "Identifica factores clave para intervenciones", "bar"),
            ],
            estimated_processing_time: "20-40 minutos",
            difficulty: Difficulty::Intermediate,
        },
        AnalysisStep {
            id: "step2-prediccion-readmision",
            name: "Predicción de readmisiones",
            description: "Calcula la probabilidad de reingreso en 30 días",
            model_type: "xgboost",
            prerequisite_steps: &["step1-estratificacion-pacientes"],
            input_fields: &[
                field("Grupo de riesgo", "Resultado de la estratificación anterior", "Alto riesgo - Tipo 2", true, Categorical),
                field("Medicación actual", "Tratamientos que está recibiendo el paciente", "Lista de medicamentos y dosis", true, Categorical),
                field("Adherencia terapéutica", "Nivel de cumplimiento del tratamiento", "75% de adherencia", false, Numeric),
            ],
            output_insights: &[
                insight("Probabilidad de readmisión", "Porcentaje de riesgo para cada paciente", "Permite planificar intervenciones preventivas", "heatmap"),
                insight("Causas probables", "Razones más probables para el reingreso", "Ayuda a personalizar las intervenciones", "radar"),
            ],
            estimated_processing_time: "30-50 minutos",
            difficulty: Difficulty::Advanced,
        },
        AnalysisStep {
            id: "step3-plan-intervencion",
            name: "Planificación de intervenciones personalizadas",
            description: "Diseña un plan de seguimiento adaptado a cada paciente",
            model_type: "optimization",
            prerequisite_steps: &["step2-prediccion-readmision"],
            input_fields: &[
                field("Riesgo de readmisión", "Porcentaje calculado en el paso anterior", "68%", true, Numeric),
                field("Recursos disponibles", "Personal y programas de seguimiento disponibles", "Visitas domiciliarias, telemonitorización, etc.", true, Categorical),
                field("Preferencias del paciente", "Modo de contacto preferido y disponibilidad", "Prefiere llamadas telefónicas por la tarde", false, Categorical),
            ],
            output_insights: &[
                insight("Plan de intervención", "Acciones específicas recomendadas por paciente", "Maximiza la efectividad del seguimiento", "table"),
                insight("Impacto esperado", "Reducción proyectada en la tasa de readmisión", "Permite evaluar el retorno de la inversión", "line"),
            ],
            estimated_processing_time: "40-60 minutos",
            difficulty: Difficulty::Advanced,
        },
    ],
    total_estimated_time: "2-3 horas",
    recommended_tools: &["FHIR Analytics", "HL7 Integration", "Tableau Healthcare"],
};

pub const MANUFACTURA_MANTENIMIENTO_PREDICTIVO: AnalysisFlow = AnalysisFlow {
    id: "manufactura-mantenimiento-predictivo",
    name: "Mantenimiento predictivo de equipos industriales",
    description: "Secuencia para anticipar fallos en maquinaria antes de que ocurran y optimizar el mantenimiento",
    industry: "manufactura",
    business_goal: "Reducir tiempos de inactividad y costos de mantenimiento",
    steps: &[
        AnalysisStep {
            id: "step1-monitoreo-anomalias",
            name: "Detección de anomalías en sensores",
            description: "Identifica patrones inusuales en las lecturas de sensores",
            model_type: "anomaly_detection",
            prerequisite_steps: &[],
            input_fields: &[
                field("Datos de sensores", "Lecturas de temperatura, vibración, presión, etc.", "Tabla con ID_Sensor, Timestamp, Valor", true, Numeric),
                field("Especificaciones técnicas", "Rangos normales de funcionamiento", "Temperatura: 60-85°C, Vibración: <2.5mm/s", true, Numeric),
                field("Historial de mantenimiento", "Registro de intervenciones previas", "Fecha, Tipo (preventivo/correctivo), Componentes", false, Categorical),
            ],
            output_insights: &[
                insight("Puntuación de anomalía", "Índice que indica qué tan inusual es cada lectura", "Detecta problemas potenciales antes de que causen fallos", "line"),
                insight("Patrones temporales", "Evolución de anomalías a lo largo del tiempo", "Identifica tendencias y patrones cíclicos", "heatmap"),
            ],
            estimated_processing_time: "30-45 minutos",
            difficulty: Difficulty::Intermediate,
        },
        AnalysisStep {
            id: "step2-prediccion-fallos",
            name: "Predicción de fallos de equipos",
            description: "Calcula la probabilidad y tiempo hasta el fallo",
            model_type: "survival_analysis",
            prerequisite_steps: &["step1-monitoreo-anomalias"],
            input_fields: &[
                field("Anomalías detectadas", "Resultados del análisis anterior", "Puntuaciones de anomalía por sensor", true, Numeric),
                field("Ciclos de operación", "Horas de funcionamiento y ciclos completados", "45.000 horas, 8.500 ciclos", true, Numeric),
                field("Historial de fallos previos", "Registro de fallos anteriores en equipos similares", "Componente, Tiempo hasta fallo, Condiciones", true, Categorical),
            ],
            output_insights: &[
                insight("Probabilidad de fallo", "Porcentaje de riesgo de fallo por equipo", "Permite priorizar intervenciones", "bar"),
                insight("Tiempo estimado hasta fallo", "Días/horas restantes hasta fallo probable", "Ayuda a programar el mantenimiento en el momento óptimo", "scatter"),
            ],
            estimated_processing_time: "45-60 minutos",
            difficulty: Difficulty::Advanced,
        },
        AnalysisStep {
            id: "step3-optimizacion-mantenimiento",
            name: "Optimización del calendario de mantenimiento",
            description: "Diseña un programa óptimo para minimizar costos e inactividad",
            model_type: "optimization",
            prerequisite_steps: &["step2-prediccion-fallos"],
            input_fields: &[
                field("Predicciones de fallos", "Resultados del análisis anterior", "Probabilidad y tiempo hasta fallo por equipo", true, Numeric),
                field("Costos asociados", "Costos de mantenimiento y de tiempo inactivo", "Preventivo: 5000€, Correctivo: 25000€, Hora inactiva: 2000€", true, Numeric),
                field("Restricciones operativas", "Limitaciones de personal y producción", "Ventanas de mantenimiento disponibles, personal técnico", true, Categorical),
            ],
            output_insights: &[
                insight("Calendario óptimo", "Programa de intervenciones recomendado", "Balance óptimo entre prevención y producción", "table"),
                insight("Ahorro proyectado", "Estimación de costos evitados y eficiencia ganada", "Cuantifica el beneficio del mantenimiento predictivo", "bar"),
            ],
            estimated_processing_time: "60-90 minutos",
            difficulty: Difficulty::Advanced,
        },
    ],
    total_estimated_time: "3-4 horas",
    recommended_tools: &["IoT Platform", "SCADA Integration", "PowerBI"],
};

/// Every built-in flow, in lookup order
pub const ALL_FLOWS: &[&AnalysisFlow] = &[
    &FINANZAS_CREDIT_RISK,
    &FINANZAS_FRAUDE_DETECTION,
    &RETAIL_CUSTOMER_LTV,
    &EDUCACION_APRENDIZAJE_PERSONALIZADO,
    &SALUD_PREDICCION_PACIENTES,
    &MANUFACTURA_MANTENIMIENTO_PREDICTIVO,
    &TECNOLOGIA_USER_ENGAGEMENT,
];
