//! Bundled sample document

/// A complete automobile loss notice
///
/// Every mandatory field is present. The description says "No injuries
/// reported", which the keyword scan still classifies as an injury claim, so
/// this document routes to the specialist queue.
pub const SAMPLE_FNOL: &str = "AUTOMOBILE LOSS NOTICE
POLICY NUMBER: AUTO-2024-12345
NAME OF INSURED: John Michael Smith
INSURED'S MAILING ADDRESS: 123 Main Street, Springfield, IL 62701
DATE OF BIRTH: 05/15/1980
PRIMARY PHONE #: (555) 123-4567
PRIMARY E-MAIL ADDRESS: john.smith@email.com

DATE OF LOSS AND TIME: 12/01/2024 2:30 PM

LOCATION OF LOSS
STREET: Highway 55 and Oak Street Intersection
CITY, STATE, ZIP: Springfield, IL 62702

DESCRIPTION OF ACCIDENT:
Vehicle was proceeding through green light when another vehicle ran red light and struck driver side. Impact caused significant damage to door and front quarter panel. Airbags deployed. No injuries reported at scene.

DRIVER'S NAME AND ADDRESS: John Michael Smith
DRIVER'S LICENSE NUMBER: S123456789
STATE: IL

INSURED VEHICLE
VEH #: 1
YEAR: 2022
MAKE: Toyota
MODEL: Camry
TYPE: Sedan
V.I.N.: 1HGBH41JXMN109186
PLATE NUMBER: ABC 1234
STATE: IL

DESCRIBE DAMAGE: Front driver side door crushed, front quarter panel damaged, airbags deployed, window shattered
ESTIMATE AMOUNT: $18,500

OTHER VEHICLE DAMAGED
YEAR: 2019
MAKE: Ford
MODEL: F-150
DRIVER'S NAME: Sarah Johnson
PHONE: (555) 987-6543

POLICE DEPARTMENT CONTACTED: Springfield Police Department
REPORT NUMBER: SPD-2024-5678";
