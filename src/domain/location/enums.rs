//! OCPI 2.2.1 closed value sets used by the Location module
//!
//! All values serialize as the upper-case strings OCPI puts on the wire.

use serde::{Deserialize, Serialize};

/// Capabilities of an EVSE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    ChargingProfileCapable,
    ChargingPreferencesCapable,
    ChipCardSupport,
    ContactlessCardSupport,
    CreditCardPayable,
    DebitCardPayable,
    PedTerminal,
    RemoteStartStopCapable,
    Reservable,
    RfidReader,
    StartSessionConnectorRequired,
    TokenGroupCapable,
    UnlockCapable,
}

/// Socket or plug standard of a connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorType {
    #[serde(rename = "CHADEMO")]
    Chademo,
    #[serde(rename = "CHAOJI")]
    Chaoji,
    #[serde(rename = "DOMESTIC_A")]
    DomesticA,
    #[serde(rename = "DOMESTIC_B")]
    DomesticB,
    #[serde(rename = "DOMESTIC_C")]
    DomesticC,
    #[serde(rename = "DOMESTIC_D")]
    DomesticD,
    #[serde(rename = "DOMESTIC_E")]
    DomesticE,
    #[serde(rename = "DOMESTIC_F")]
    DomesticF,
    #[serde(rename = "DOMESTIC_G")]
    DomesticG,
    #[serde(rename = "DOMESTIC_H")]
    DomesticH,
    #[serde(rename = "DOMESTIC_I")]
    DomesticI,
    #[serde(rename = "DOMESTIC_J")]
    DomesticJ,
    #[serde(rename = "DOMESTIC_K")]
    DomesticK,
    #[serde(rename = "DOMESTIC_L")]
    DomesticL,
    #[serde(rename = "GBT_AC")]
    GbtAc,
    #[serde(rename = "GBT_DC")]
    GbtDc,
    #[serde(rename = "IEC_60309_2_single_16")]
    Iec60309_2Single16,
    #[serde(rename = "IEC_60309_2_three_16")]
    Iec60309_2Three16,
    #[serde(rename = "IEC_60309_2_three_32")]
    Iec60309_2Three32,
    #[serde(rename = "IEC_60309_2_three_64")]
    Iec60309_2Three64,
    #[serde(rename = "IEC_62196_T1")]
    Iec62196T1,
    #[serde(rename = "IEC_62196_T1_COMBO")]
    Iec62196T1Combo,
    #[serde(rename = "IEC_62196_T2")]
    Iec62196T2,
    #[serde(rename = "IEC_62196_T2_COMBO")]
    Iec62196T2Combo,
    #[serde(rename = "IEC_62196_T3A")]
    Iec62196T3A,
    #[serde(rename = "IEC_62196_T3C")]
    Iec62196T3C,
    #[serde(rename = "NEMA_5_20")]
    Nema5_20,
    #[serde(rename = "NEMA_6_30")]
    Nema6_30,
    #[serde(rename = "NEMA_6_50")]
    Nema6_50,
    #[serde(rename = "NEMA_10_30")]
    Nema10_30,
    #[serde(rename = "NEMA_10_50")]
    Nema10_50,
    #[serde(rename = "NEMA_14_30")]
    Nema14_30,
    #[serde(rename = "NEMA_14_50")]
    Nema14_50,
    #[serde(rename = "PANTOGRAPH_BOTTOM_UP")]
    PantographBottomUp,
    #[serde(rename = "PANTOGRAPH_TOP_DOWN")]
    PantographTopDown,
    #[serde(rename = "TESLA_R")]
    TeslaR,
    #[serde(rename = "TESLA_S")]
    TeslaS,
}

/// Whether a connector is a socket or an attached cable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectorFormat {
    Socket,
    Cable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerType {
    #[serde(rename = "AC_1_PHASE")]
    Ac1Phase,
    #[serde(rename = "AC_2_PHASE")]
    Ac2Phase,
    #[serde(rename = "AC_2_PHASE_SPLIT")]
    Ac2PhaseSplit,
    #[serde(rename = "AC_3_PHASE")]
    Ac3Phase,
    #[serde(rename = "DC")]
    Dc,
}

/// Categories of energy sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergySourceCategory {
    Nuclear,
    GeneralFossil,
    Coal,
    Gas,
    GeneralGreen,
    Solar,
    Wind,
    Water,
}

/// Categories of environmental impact values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvironmentalImpactCategory {
    NuclearWaste,
    CarbonDioxide,
}

/// Facilities at a charging location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Facility {
    Hotel,
    Restaurant,
    Cafe,
    Mall,
    Supermarket,
    Sport,
    RecreationArea,
    Nature,
    Museum,
    BikeSharing,
    BusStop,
    TaxiStand,
    TramStop,
    MetroStation,
    TrainStation,
    Airport,
    ParkingLot,
    CarpoolParking,
    FuelStation,
    Wifi,
}

/// Intended use of an image in a user presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageCategory {
    Charger,
    Entrance,
    Location,
    Network,
    Operator,
    Other,
    Owner,
}

/// Restriction on who may use the parking spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParkingRestriction {
    EvOnly,
    Plugged,
    Disabled,
    Customers,
    Motorcycles,
}

/// General type of the charge point's location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParkingType {
    AlongMotorway,
    ParkingGarage,
    ParkingLot,
    OnDriveway,
    OnStreet,
    UndergroundGarage,
}

/// Status of an EVSE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Available,
    Blocked,
    Charging,
    Inoperative,
    #[serde(rename = "OUTOFORDER")]
    OutOfOrder,
    Planned,
    Removed,
    Reserved,
    Unknown,
}

/// Kind of token a Location may be published to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    AdHocUser,
    AppUser,
    Other,
    Rfid,
}
